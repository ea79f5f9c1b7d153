use std::collections::BTreeMap;

use super::CurrentUser;

/// Request-scoped state the layout reads: which route matched, its path
/// parameters, the full URL and who is logged in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub route_name: String,
    pub matchdict: BTreeMap<String, String>,
    pub url: String,
    pub user: Option<CurrentUser>,
}

impl RequestContext {
    pub fn new(route_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_user(mut self, user: Option<CurrentUser>) -> Self {
        self.user = user;
        self
    }

    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.matchdict.insert(key.to_string(), value.into());
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.matchdict.get(key).map(String::as_str)
    }
}
