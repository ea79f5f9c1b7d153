use std::collections::BTreeMap;

use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

use crate::models::{AppState, CurrentUser, RequestContext};
use crate::settings::BASE_ADDRESS;
use crate::templates::PageTemplate;
use crate::utils::absolute_url;

/// The user name the upstream identity layer vouched for, if any.
pub fn current_user_from_headers(state: &AppState, headers: &HeaderMap) -> Option<CurrentUser> {
    let name = headers.get(state.user_header.as_str())?.to_str().ok()?.trim();
    if name.is_empty() {
        return None;
    }
    Some(CurrentUser::new(name))
}

/// Full URL of the current request, rooted at the configured base address.
pub fn current_url(state: &AppState, uri: &Uri) -> String {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    match state.shell.settings().get(BASE_ADDRESS) {
        Some(base) => absolute_url(base.trim_end_matches('/'), path),
        None => path.to_string(),
    }
}

pub fn build_request_context(
    state: &AppState,
    route_name: &str,
    headers: &HeaderMap,
    uri: &Uri,
    matchdict: BTreeMap<String, String>,
) -> RequestContext {
    RequestContext {
        route_name: route_name.to_string(),
        matchdict,
        url: current_url(state, uri),
        user: current_user_from_headers(state, headers),
    }
}

pub fn render_page<T: PageTemplate>(state: &AppState, request: &RequestContext, page: T) -> Response {
    match state.shell.render_page(request, &page) {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, route = %request.route_name, "Page render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
