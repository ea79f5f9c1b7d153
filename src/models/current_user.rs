use serde::{Deserialize, Serialize};

/// The user an upstream identity layer authenticated for this request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub name: String,
}

impl CurrentUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The identity-provider identifier for this user. `template` carries a
    /// `{username}` placeholder, e.g. `{username}.id.fedoraproject.org`.
    pub fn openid(&self, template: &str) -> String {
        template.replace("{username}", &self.name)
    }
}
