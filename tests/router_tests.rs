use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use bodhi_web::models::{AppState, ReleaseStats};
use bodhi_web::routes::build_router;
use bodhi_web::runtime::RuntimeInfo;
use bodhi_web::{PageShell, Settings};

fn settings() -> Settings {
    Settings::new()
        .with("cors_connect_src", "https://*.fedoraproject.org")
        .with("base_address", "https://bodhi.fedoraproject.org/")
        .with("fedmenu.url", "https://apps.fedoraproject.org/fedmenu")
        .with("fedmenu.data_url", "https://apps.fedoraproject.org/js/data.js")
}

fn state(settings: Settings) -> AppState {
    let shell = PageShell::from_settings(settings, RuntimeInfo::new("2.0.0", "localhost"));
    AppState::new(shell, "X-Remote-User")
}

async fn get(state: AppState, uri: &str, user: Option<&str>) -> (StatusCode, String) {
    let mut request = Request::builder().uri(uri);
    if let Some(user) = user {
        request = request.header("X-Remote-User", user);
    }
    let response = build_router(state, "static")
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_home_anonymous() {
    let (status, html) = get(state(settings()), "/?q=kernel", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("login?came_from=https%3A%2F%2Fbodhi.fedoraproject.org%2F%3Fq%3Dkernel"));
    assert!(html.contains("Fedora Updates System"));
}

#[tokio::test]
async fn test_header_user_gets_logout() {
    let (status, html) = get(state(settings()), "/", Some("alice")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<a href="logout">Logout</a>"#));
    assert!(html.contains("Welcome back, alice."));
}

#[tokio::test]
async fn test_own_profile_is_active_and_seeds_menu() {
    let (status, html) = get(state(settings()), "/users/alice", Some("alice")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<li class="active"><a href="users/alice">Profile</a></li>"#));
    assert!(html.contains(r#""user": "alice""#));
    assert!(html.contains("This is your profile."));
}

#[tokio::test]
async fn test_other_profile_is_not_active() {
    let (_, html) = get(state(settings()), "/users/bob", Some("alice")).await;
    assert!(html.contains(r#"<li><a href="users/alice">Profile</a></li>"#));
    assert!(html.contains(r#""user": "bob""#));
}

#[tokio::test]
async fn test_new_update_highlighted() {
    let (status, html) = get(state(settings()), "/updates/new", Some("alice")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<li class="active"><a href="updates/new">Update</a></li>"#));
}

#[tokio::test]
async fn test_metrics_page() {
    let stats = vec![ReleaseStats {
        name: "F23".into(),
        version_int: 23,
        bugfix: 12,
        enhancement: 3,
        security: 1,
        newpackage: 4,
    }];
    let state = state(settings()).with_release_stats(stats);
    let (status, html) = get(state, "/metrics", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<li class="active"><a href="metrics">Metrics</a></li>"#));
    assert!(html.contains(r#"var metrics_ticks = [[0,"F23"]];"#));
}

#[tokio::test]
async fn test_missing_settings_yield_server_error() {
    let settings = Settings::new().with("base_address", "https://bodhi.fedoraproject.org/");
    let (status, body) = get(state(settings), "/", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.contains("<html"));
}
