use askama::Template;

use crate::assets::ResolvedAssets;
use crate::menu::FedMenu;
use crate::models::CurrentUser;
use crate::navigation::Navigation;
use crate::runtime::RuntimeInfo;

/// The document shell every page is wrapped in.
#[derive(Template)]
#[template(path = "layout.html")]
pub struct LayoutTemplate<'a> {
    pub connect_src: &'a str,
    pub base_address: &'a str,
    pub assets: &'a ResolvedAssets,
    pub nav: &'a Navigation,
    pub current_user: Option<&'a CurrentUser>,
    /// Pre-rendered page markup, embedded unescaped.
    pub content: &'a str,
    pub runtime: &'a RuntimeInfo,
    pub fedmenu: Option<&'a FedMenu>,
    pub fedmenu_config: String,
}
