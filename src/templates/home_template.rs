use askama::Template;

use crate::navigation::route;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub user_name: Option<String>,
}

crate::impl_page_template!(HomeTemplate, route::HOME);
