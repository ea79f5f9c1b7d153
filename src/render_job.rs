//! One-off renders described on the command line instead of by an HTTP
//! request. Builds the same request context and view model the server
//! handlers would.

use std::path::Path;

use crate::error::ShellError;
use crate::models::{CurrentUser, RequestContext, UserProfile, ViewModel};
use crate::navigation::route;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderJob {
    pub route: String,
    pub url: String,
    pub user: Option<String>,
    /// Path parameters, in the order given
    pub params: Vec<(String, String)>,
    /// Explicit subject; derived from the route when absent
    pub view: Option<ViewModel>,
}

/// Parse a `key=value` path parameter.
pub fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got `{}`", raw)),
    }
}

/// Read a JSON view model such as `{"update": {"user": ..., "builds": [...]}}`.
pub fn load_view_model(path: impl AsRef<Path>) -> Result<ViewModel, ShellError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ShellError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let view = serde_json::from_str(&raw)?;
    tracing::debug!(path = %path.display(), "Loaded view model");
    Ok(view)
}

impl RenderJob {
    pub fn new(route: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            route: route.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn request(&self) -> RequestContext {
        let request = RequestContext::new(self.route.as_str(), self.url.as_str())
            .with_user(self.user.clone().map(CurrentUser::new));
        self.params
            .iter()
            .fold(request, |request, (key, value)| request.with_param(key, value.as_str()))
    }

    /// The explicit view model, or the viewed user on the `user` route.
    pub fn view_model(&self) -> ViewModel {
        if let Some(view) = &self.view {
            return view.clone();
        }
        if self.route == route::USER {
            let name = self.params.iter().rev().find(|(key, _)| key == "name");
            if let Some((_, name)) = name {
                return ViewModel::User(UserProfile { name: name.clone() });
            }
        }
        ViewModel::None
    }
}
