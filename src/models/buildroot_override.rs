use serde::{Deserialize, Serialize};

use super::build::Build;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildrootOverride {
    /// Submitter's user name
    pub submitter: String,
    pub build: Build,
}
