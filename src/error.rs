/// Error types for page rendering
use thiserror::Error;

/// Errors that can occur while rendering a page
#[derive(Debug, Error)]
pub enum ShellError {
    /// A setting the layout cannot do without is absent
    #[error("Missing required setting: {0}")]
    MissingSetting(&'static str),

    /// The template engine failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// Chart data or a view model could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A view model file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
