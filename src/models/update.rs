use serde::{Deserialize, Serialize};

use super::build::Build;

/// The parts of an update the page layout reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    /// Submitter's user name
    pub user: String,
    pub builds: Vec<Build>,
}

impl Update {
    /// The package name, but only when the update carries exactly one build.
    pub fn single_package(&self) -> Option<&str> {
        match self.builds.as_slice() {
            [build] => Some(build.package.as_str()),
            _ => None,
        }
    }
}
