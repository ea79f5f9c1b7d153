use serde::{Deserialize, Serialize};

use super::{BuildrootOverride, Update, UserProfile};

/// The subject entity of the page being rendered, if any.
///
/// Serialized externally tagged: `"none"`, `{"update": {...}}`,
/// `{"override": {...}}` or `{"user": {"name": ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewModel {
    #[default]
    None,
    Update(Update),
    Override(BuildrootOverride),
    User(UserProfile),
}

impl From<Update> for ViewModel {
    fn from(update: Update) -> Self {
        ViewModel::Update(update)
    }
}

impl From<BuildrootOverride> for ViewModel {
    fn from(value: BuildrootOverride) -> Self {
        ViewModel::Override(value)
    }
}

impl From<UserProfile> for ViewModel {
    fn from(user: UserProfile) -> Self {
        ViewModel::User(user)
    }
}
