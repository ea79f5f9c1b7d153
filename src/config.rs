use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 6543;
pub const DEFAULT_USER_HEADER: &str = "X-Remote-User";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        match dotenvy::from_path(Path::new(path)) {
            Ok(()) => tracing::info!(path, "Loaded environment file"),
            Err(e) => tracing::warn!(%e, path, "Could not load environment file"),
        }
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_host() -> String {
    env::var("BODHI_HOST")
        .ok()
        .filter(|h| !h.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
}

pub fn get_port() -> u16 {
    env::var("BODHI_PORT")
        .ok()
        .and_then(|p| p.trim().parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn get_user_header() -> String {
    sanitize_header_name(&env::var("BODHI_USER_HEADER").unwrap_or_default())
}

pub fn sanitize_header_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_USER_HEADER.to_string()
    } else {
        trimmed.to_string()
    }
}
