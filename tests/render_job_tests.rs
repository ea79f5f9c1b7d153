use std::io::Write;

use bodhi_web::assets::StaticAssets;
use bodhi_web::models::{Build, Update, UserProfile};
use bodhi_web::render_job::{load_view_model, parse_param, RenderJob};
use bodhi_web::runtime::RuntimeInfo;
use bodhi_web::{PageShell, Settings, ShellError, ViewModel};

fn shell() -> PageShell {
    let settings = Settings::new()
        .with("cors_connect_src", "self")
        .with("base_address", "https://bodhi.example/")
        .with("fedmenu.url", "https://menu.example")
        .with("fedmenu.data_url", "https://menu.example/data.js");
    PageShell::new(settings, StaticAssets::default(), RuntimeInfo::new("2.0.0", "localhost"))
}

fn view_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_parse_param() {
    assert_eq!(parse_param("name=alice").unwrap(), ("name".to_string(), "alice".to_string()));
    assert_eq!(parse_param("q=a=b").unwrap(), ("q".to_string(), "a=b".to_string()));
    assert!(parse_param("alice").is_err());
    assert!(parse_param("=alice").is_err());
}

#[test]
fn test_params_reach_request_context() {
    let mut job = RenderJob::new("user", "https://bodhi.example/users/alice");
    job.user = Some("alice".into());
    job.params = vec![("name".into(), "alice".into())];

    let request = job.request();
    assert_eq!(request.route_name, "user");
    assert_eq!(request.param("name"), Some("alice"));
    assert_eq!(request.user.as_ref().map(|u| u.name.as_str()), Some("alice"));
}

#[test]
fn test_user_route_with_name_views_that_user() {
    let mut job = RenderJob::new("user", "/");
    assert_eq!(job.view_model(), ViewModel::None);

    job.params = vec![("name".into(), "bob".into())];
    assert_eq!(job.view_model(), ViewModel::User(UserProfile { name: "bob".into() }));

    job.route = "home".into();
    assert_eq!(job.view_model(), ViewModel::None);
}

#[test]
fn test_own_profile_renders_like_the_server() {
    let mut job = RenderJob::new("user", "https://bodhi.example/users/alice");
    job.user = Some("alice".into());
    job.params = vec![("name".into(), "alice".into())];

    let html = shell().render(&job.request(), "<p>x</p>", &job.view_model()).unwrap();
    assert!(html.contains(r#"<li class="active"><a href="users/alice">Profile</a></li>"#));
    assert!(html.contains(r#""user": "alice""#));
}

#[test]
fn test_explicit_view_wins_over_route() {
    let mut job = RenderJob::new("user", "/");
    job.params = vec![("name".into(), "bob".into())];
    job.view = Some(ViewModel::None);
    assert_eq!(job.view_model(), ViewModel::None);
}

#[test]
fn test_one_build_update_from_view_file() {
    let file = view_file(
        r#"{"update": {"user": "alice", "builds": [{"nvr": "kernel-4.2.3-300.fc23", "package": "kernel"}]}}"#,
    );
    let view = load_view_model(file.path()).unwrap();
    assert_eq!(
        view,
        ViewModel::Update(Update {
            user: "alice".into(),
            builds: vec![Build::new("kernel-4.2.3-300.fc23", "kernel")],
        })
    );

    let mut job = RenderJob::new("home", "/");
    job.view = Some(view);
    let html = shell().render(&job.request(), "", &job.view_model()).unwrap();
    assert!(html.contains(r#""user": "alice""#));
    assert!(html.contains(r#""package": "kernel""#));
}

#[test]
fn test_view_file_variants() {
    let file = view_file(r#"{"override": {"submitter": "bob", "build": {"nvr": "rpm-4.13.0-1.fc23", "package": "rpm"}}}"#);
    assert!(matches!(load_view_model(file.path()).unwrap(), ViewModel::Override(o) if o.build.package == "rpm"));

    let file = view_file(r#""none""#);
    assert_eq!(load_view_model(file.path()).unwrap(), ViewModel::None);
}

#[test]
fn test_view_file_errors() {
    let file = view_file(r#"{"release": {}}"#);
    assert!(matches!(load_view_model(file.path()), Err(ShellError::Json(_))));

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(load_view_model(&missing), Err(ShellError::Io { .. })));
}
