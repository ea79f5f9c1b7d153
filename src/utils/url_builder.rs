/// Join a request path (with any query string) onto the site's base address.
/// Absolute URLs are returned unchanged.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return format!("{}/", base);
    }
    format!("{}/{}", base, path)
}
