//! Page shell for the Fedora Updates System (Bodhi) web front-end, plus a
//! small axum server that renders its pages through it.

pub mod assets;
pub mod config;
pub mod error;
pub mod handlers;
pub mod menu;
pub mod metrics;
pub mod models;
pub mod navigation;
pub mod render_job;
pub mod routes;
pub mod runtime;
pub mod settings;
pub mod shell;
pub mod templates;
pub mod utils;

pub use error::ShellError;
pub use models::{RequestContext, ViewModel};
pub use settings::Settings;
pub use shell::PageShell;
