use askama::Template;

use crate::models::{UserProfile, ViewModel};
use crate::navigation::route;

#[derive(Template)]
#[template(path = "user.html")]
pub struct UserTemplate {
    pub profile: UserProfile,
    /// True when the viewer is looking at their own page.
    pub is_self: bool,
}

impl super::PageTemplate for UserTemplate {
    fn route_name(&self) -> &'static str {
        route::USER
    }

    fn view_model(&self) -> ViewModel {
        ViewModel::User(self.profile.clone())
    }
}
