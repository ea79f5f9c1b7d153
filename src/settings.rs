use std::collections::BTreeMap;
use std::env;

use crate::error::ShellError;

pub const CORS_CONNECT_SRC: &str = "cors_connect_src";
pub const BASE_ADDRESS: &str = "base_address";
pub const FMN_URL: &str = "fmn_url";
pub const FEDMENU_URL: &str = "fedmenu.url";
pub const FEDMENU_DATA_URL: &str = "fedmenu.data_url";
pub const OPENID_TEMPLATE: &str = "openid_template";
pub const STATIC_PREFIX: &str = "static_prefix";

pub const DEFAULT_OPENID_TEMPLATE: &str = "{username}.id.fedoraproject.org";
pub const DEFAULT_STATIC_PREFIX: &str = "static/";

/// Every settings key paired with the environment variable it is read from.
pub const KNOWN_SETTINGS: &[(&str, &str)] = &[
    (CORS_CONNECT_SRC, "BODHI_CORS_CONNECT_SRC"),
    (BASE_ADDRESS, "BODHI_BASE_ADDRESS"),
    (FMN_URL, "BODHI_FMN_URL"),
    (FEDMENU_URL, "BODHI_FEDMENU_URL"),
    (FEDMENU_DATA_URL, "BODHI_FEDMENU_DATA_URL"),
    (OPENID_TEMPLATE, "BODHI_OPENID_TEMPLATE"),
    (STATIC_PREFIX, "BODHI_STATIC_PREFIX"),
];

/// Keys without which no page can be rendered.
pub const REQUIRED_SETTINGS: &[&str] = &[CORS_CONNECT_SRC, BASE_ADDRESS];

/// Application settings as a flat key/value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful for tests and the CLI.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        let value = if key == BASE_ADDRESS {
            normalize_base_address(&value)
        } else {
            value
        };
        self.values.insert(key.to_string(), value);
    }

    /// Read every known `BODHI_*` variable from the environment. Blank values
    /// count as unset.
    pub fn from_env() -> Self {
        let mut settings = Self::new();
        for (key, var) in KNOWN_SETTINGS {
            if let Ok(value) = env::var(var) {
                if !value.trim().is_empty() {
                    settings.insert(key, value.trim());
                }
            }
        }
        settings
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn require(&self, key: &'static str) -> Result<&str, ShellError> {
        self.get(key).ok_or(ShellError::MissingSetting(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Required keys that are not present, in declaration order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        REQUIRED_SETTINGS
            .iter()
            .copied()
            .filter(|key| !self.contains(key))
            .collect()
    }

    pub fn openid_template(&self) -> &str {
        self.get(OPENID_TEMPLATE).unwrap_or(DEFAULT_OPENID_TEMPLATE)
    }

    pub fn static_prefix(&self) -> &str {
        self.get(STATIC_PREFIX).unwrap_or(DEFAULT_STATIC_PREFIX)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Relative links only resolve under the base address when it ends in `/`.
pub fn normalize_base_address(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    format!("{}/", trimmed)
}
