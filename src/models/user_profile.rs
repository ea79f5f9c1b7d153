use serde::{Deserialize, Serialize};

/// A user whose page is being viewed (not necessarily the one logged in).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
}
