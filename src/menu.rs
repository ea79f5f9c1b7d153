use serde::Serialize;

use crate::error::ShellError;
use crate::models::ViewModel;
use crate::settings::{Settings, FEDMENU_DATA_URL, FEDMENU_URL};
use crate::utils::script_safe_json;

pub const FEDMENU_MIME_TYPE: &str = "application/javascript";
pub const FEDMENU_POSITION: &str = "bottom-right";

/// The `user`/`package` pair the menu widget is seeded with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuSubject {
    pub user: Option<String>,
    pub package: Option<String>,
}

impl MenuSubject {
    /// Precedence is update, then override, then user.
    pub fn from_view_model(view: &ViewModel) -> Self {
        match view {
            ViewModel::Update(update) => Self {
                user: Some(update.user.clone()),
                package: update.single_package().map(str::to_string),
            },
            ViewModel::Override(buildroot_override) => Self {
                user: Some(buildroot_override.submitter.clone()),
                package: Some(buildroot_override.build.package.clone()),
            },
            ViewModel::User(user) => Self {
                user: Some(user.name.clone()),
                package: None,
            },
            ViewModel::None => Self::default(),
        }
    }
}

/// Argument passed to the widget's `fedmenu({...})` initializer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FedMenuConfig {
    pub url: String,
    #[serde(rename = "mimeType")]
    pub mime_type: &'static str,
    pub position: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
}

/// Everything the layout needs to emit the widget block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FedMenu {
    pub script_url: String,
    pub config: FedMenuConfig,
}

impl FedMenu {
    /// `None` when the widget is not configured.
    pub fn from_settings(settings: &Settings, view: &ViewModel) -> Option<Self> {
        let base = settings.get(FEDMENU_URL)?;
        let subject = MenuSubject::from_view_model(view);
        Some(Self {
            script_url: format!("{}/js/fedmenu.js", base.trim_end_matches('/')),
            config: FedMenuConfig {
                url: settings.get(FEDMENU_DATA_URL).unwrap_or_default().to_string(),
                mime_type: FEDMENU_MIME_TYPE,
                position: FEDMENU_POSITION,
                user: subject.user,
                package: subject.package,
            },
        })
    }

    /// The initializer argument as a JSON object literal that is safe to drop
    /// into a `<script>` element.
    pub fn config_json(&self) -> Result<String, ShellError> {
        let json = serde_json::to_string_pretty(&self.config)?;
        Ok(script_safe_json(&json))
    }
}
