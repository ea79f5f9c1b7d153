use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, Uri},
    response::IntoResponse,
};

use crate::models::{AppState, UserProfile};
use crate::navigation::route;
use crate::templates::{ComingSoonTemplate, HomeTemplate, PageTemplate, UserTemplate};

use super::helpers::{build_request_context, render_page};

pub async fn home_get(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> impl IntoResponse {
    let request = build_request_context(&state, route::HOME, &headers, &uri, BTreeMap::new());
    let page = HomeTemplate {
        user_name: request.user.as_ref().map(|u| u.name.clone()),
    };
    render_page(&state, &request, page)
}

pub async fn user_get(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
    uri: Uri,
) -> impl IntoResponse {
    let matchdict = BTreeMap::from([("name".to_string(), name.clone())]);
    let request = build_request_context(&state, route::USER, &headers, &uri, matchdict);
    let is_self = request.user.as_ref().is_some_and(|u| u.name == name);
    let page = UserTemplate {
        profile: UserProfile { name },
        is_self,
    };
    render_page(&state, &request, page)
}

fn coming_soon(state: &AppState, headers: &HeaderMap, uri: &Uri, page: ComingSoonTemplate) -> axum::response::Response {
    let request = build_request_context(state, page.route_name(), headers, uri, BTreeMap::new());
    render_page(state, &request, page)
}

pub async fn new_update_get(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> impl IntoResponse {
    coming_soon(&state, &headers, &uri, ComingSoonTemplate {
        feature_name: "New update".into(),
        route: route::NEW_UPDATE,
    })
}

pub async fn new_override_get(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> impl IntoResponse {
    coming_soon(&state, &headers, &uri, ComingSoonTemplate {
        feature_name: "New buildroot override".into(),
        route: route::NEW_OVERRIDE,
    })
}

pub async fn new_stack_get(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> impl IntoResponse {
    coming_soon(&state, &headers, &uri, ComingSoonTemplate {
        feature_name: "New stack".into(),
        route: route::NEW_STACK,
    })
}
