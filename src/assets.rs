/// Logical names are written the way the asset pipeline addresses them.
pub const ASSET_NAME_PREFIX: &str = "bodhi:static/";

pub const ICON: &str = "bodhi:static/ico/favicon.ico";

pub const STYLESHEETS: &[&str] = &[
    "bodhi:static/bootstrap/css/bootstrap.min.css",
    "bodhi:static/css/font-awesome.min.css",
    "bodhi:static/css/site.css",
    "bodhi:static/css/messenger.css",
    "bodhi:static/css/messenger-theme-flat.css",
    "bodhi:static/css/typeahead.css",
];

pub const SCRIPTS: &[&str] = &[
    "bodhi:static/js/jquery-1.11.2.min.js",
    "bodhi:static/bootstrap/js/bootstrap.min.js",
    "bodhi:static/js/Chart.min.js",
    "bodhi:static/js/site.js",
    "bodhi:static/js/forms.js",
    "bodhi:static/js/messenger.min.js",
    "bodhi:static/js/messenger-theme-flat.js",
    "bodhi:static/js/typeahead.bundle.min.js",
    "bodhi:static/js/search.js",
];

/// Maps a logical asset name to a URL the browser can fetch.
pub trait AssetResolver: Send + Sync {
    fn asset_url(&self, name: &str) -> String;
}

/// Resolves assets to files under a static prefix, e.g. `static/css/site.css`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAssets {
    prefix: String,
}

impl StaticAssets {
    pub fn new(prefix: &str) -> Self {
        let prefix = prefix.trim();
        let prefix = if prefix.is_empty() || prefix.ends_with('/') {
            prefix.to_string()
        } else {
            format!("{}/", prefix)
        };
        Self { prefix }
    }
}

impl Default for StaticAssets {
    fn default() -> Self {
        Self::new(crate::settings::DEFAULT_STATIC_PREFIX)
    }
}

impl AssetResolver for StaticAssets {
    fn asset_url(&self, name: &str) -> String {
        let path = name.strip_prefix(ASSET_NAME_PREFIX).unwrap_or(name);
        format!("{}{}", self.prefix, path)
    }
}

/// Asset URLs the layout head references, resolved once per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAssets {
    pub icon: String,
    pub stylesheets: Vec<String>,
    pub scripts: Vec<String>,
}

impl ResolvedAssets {
    pub fn resolve<A: AssetResolver + ?Sized>(resolver: &A) -> Self {
        Self {
            icon: resolver.asset_url(ICON),
            stylesheets: STYLESHEETS.iter().map(|s| resolver.asset_url(s)).collect(),
            scripts: SCRIPTS.iter().map(|s| resolver.asset_url(s)).collect(),
        }
    }
}
