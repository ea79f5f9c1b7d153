use serde::{Deserialize, Serialize};

/// Stable update counts for one release, keyed by update type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseStats {
    pub name: String,
    pub version_int: u32,
    #[serde(default)]
    pub bugfix: u64,
    #[serde(default)]
    pub enhancement: u64,
    #[serde(default)]
    pub security: u64,
    #[serde(default)]
    pub newpackage: u64,
}
