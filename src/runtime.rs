/// Version and host the footer reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub version: String,
    pub hostname: String,
}

impl RuntimeInfo {
    pub fn new(version: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            hostname: hostname.into(),
        }
    }

    /// Package version from Cargo metadata, hostname from the system.
    pub fn detect() -> Self {
        let hostname = std::process::Command::new("hostname")
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
            .unwrap_or_default();
        let hostname = if hostname.is_empty() {
            tracing::warn!("Could not determine hostname; reporting localhost");
            "localhost".to_string()
        } else {
            hostname
        };

        Self::new(env!("CARGO_PKG_VERSION"), hostname)
    }
}
