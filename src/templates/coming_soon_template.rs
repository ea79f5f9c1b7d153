use askama::Template;

#[derive(Template)]
#[template(path = "coming_soon.html")]
pub struct ComingSoonTemplate {
    pub feature_name: String,
    pub route: &'static str,
}

impl super::PageTemplate for ComingSoonTemplate {
    fn route_name(&self) -> &'static str {
        self.route
    }
}
