use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub nvr: String,
    pub package: String,
}

impl Build {
    pub fn new(nvr: impl Into<String>, package: impl Into<String>) -> Self {
        Self {
            nvr: nvr.into(),
            package: package.into(),
        }
    }
}
