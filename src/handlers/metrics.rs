use std::collections::BTreeMap;

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::metrics::chart_payload;
use crate::models::AppState;
use crate::navigation::route;
use crate::templates::MetricsTemplate;

use super::helpers::{build_request_context, render_page};

pub async fn metrics_get(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> Response {
    let request = build_request_context(&state, route::METRICS, &headers, &uri, BTreeMap::new());
    let payload = match chart_payload(&state.release_stats) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!(%e, "Failed to build metrics payload");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
        }
    };
    render_page(&state, &request, MetricsTemplate {
        data: payload.data,
        ticks: payload.ticks,
    })
}
