//! The page shell: wraps page markup in the document head, navigation bar,
//! footer and the optional menu widget.

use askama::Template;

use crate::assets::{AssetResolver, ResolvedAssets, StaticAssets};
use crate::error::ShellError;
use crate::menu::FedMenu;
use crate::models::{RequestContext, ViewModel};
use crate::navigation::Navigation;
use crate::runtime::RuntimeInfo;
use crate::settings::{Settings, BASE_ADDRESS, CORS_CONNECT_SRC};
use crate::templates::{LayoutTemplate, PageTemplate};

/// Renders complete HTML documents. Immutable once built, so one instance can
/// serve every request.
pub struct PageShell<A: AssetResolver = StaticAssets> {
    settings: Settings,
    assets: A,
    runtime: RuntimeInfo,
}

impl PageShell<StaticAssets> {
    /// A shell resolving assets under the `static_prefix` setting.
    pub fn from_settings(settings: Settings, runtime: RuntimeInfo) -> Self {
        let assets = StaticAssets::new(settings.static_prefix());
        Self::new(settings, assets, runtime)
    }
}

impl<A: AssetResolver> PageShell<A> {
    pub fn new(settings: Settings, assets: A, runtime: RuntimeInfo) -> Self {
        Self {
            settings,
            assets,
            runtime,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn runtime(&self) -> &RuntimeInfo {
        &self.runtime
    }

    /// Render `content` inside the layout. Fails without producing any output
    /// when a required setting is missing.
    pub fn render(
        &self,
        request: &RequestContext,
        content: &str,
        view: &ViewModel,
    ) -> Result<String, ShellError> {
        let connect_src = self.settings.require(CORS_CONNECT_SRC)?;
        let base_address = self.settings.require(BASE_ADDRESS)?;

        let assets = ResolvedAssets::resolve(&self.assets);
        let nav = Navigation::build(request, &self.settings);
        let fedmenu = FedMenu::from_settings(&self.settings, view);
        let fedmenu_config = match &fedmenu {
            Some(menu) => menu.config_json()?,
            None => String::new(),
        };

        tracing::debug!(
            route = %request.route_name,
            authenticated = request.user.is_some(),
            fedmenu = fedmenu.is_some(),
            "Rendering page"
        );

        let layout = LayoutTemplate {
            connect_src,
            base_address,
            assets: &assets,
            nav: &nav,
            current_user: request.user.as_ref(),
            content,
            runtime: &self.runtime,
            fedmenu: fedmenu.as_ref(),
            fedmenu_config,
        };

        Ok(layout.render()?)
    }

    /// Render a page body template, then wrap it with its route's context.
    pub fn render_page<T: PageTemplate>(
        &self,
        request: &RequestContext,
        page: &T,
    ) -> Result<String, ShellError> {
        let content = page.render()?;
        self.render(request, &content, &page.view_model())
    }
}
