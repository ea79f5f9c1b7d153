use bodhi_web::menu::{FedMenu, MenuSubject};
use bodhi_web::models::{Build, BuildrootOverride, Update, UserProfile, ViewModel};
use bodhi_web::Settings;

fn update(builds: &[(&str, &str)]) -> Update {
    Update {
        user: "alice".into(),
        builds: builds.iter().map(|(nvr, pkg)| Build::new(*nvr, *pkg)).collect(),
    }
}

#[test]
fn test_update_projection() {
    let single = MenuSubject::from_view_model(&update(&[("kernel-4.2.3-300.fc23", "kernel")]).into());
    assert_eq!(single.user.as_deref(), Some("alice"));
    assert_eq!(single.package.as_deref(), Some("kernel"));

    let multi = MenuSubject::from_view_model(
        &update(&[("kernel-4.2.3-300.fc23", "kernel"), ("perf-4.2.3-300.fc23", "perf")]).into(),
    );
    assert_eq!(multi.user.as_deref(), Some("alice"));
    assert_eq!(multi.package, None);

    let empty = MenuSubject::from_view_model(&update(&[]).into());
    assert_eq!(empty.package, None);
}

#[test]
fn test_override_projection() {
    let view: ViewModel = BuildrootOverride {
        submitter: "bob".into(),
        build: Build::new("rpm-4.13.0-0.rc1.fc23", "rpm"),
    }
    .into();
    let subject = MenuSubject::from_view_model(&view);
    assert_eq!(subject.user.as_deref(), Some("bob"));
    assert_eq!(subject.package.as_deref(), Some("rpm"));
}

#[test]
fn test_user_and_none_projection() {
    let user = MenuSubject::from_view_model(&UserProfile { name: "carol".into() }.into());
    assert_eq!(user, MenuSubject { user: Some("carol".into()), package: None });
    assert_eq!(MenuSubject::from_view_model(&ViewModel::None), MenuSubject::default());
}

#[test]
fn test_fedmenu_requires_url_setting() {
    let settings = Settings::new().with("fedmenu.data_url", "https://apps.fedoraproject.org/js/data.js");
    assert!(FedMenu::from_settings(&settings, &ViewModel::None).is_none());

    let settings = settings.with("fedmenu.url", "https://apps.fedoraproject.org/fedmenu/");
    let menu = FedMenu::from_settings(&settings, &ViewModel::None).unwrap();
    assert_eq!(menu.script_url, "https://apps.fedoraproject.org/fedmenu/js/fedmenu.js");
    assert_eq!(menu.config.url, "https://apps.fedoraproject.org/js/data.js");
}

#[test]
fn test_config_json_key_order() {
    let settings = Settings::new()
        .with("fedmenu.url", "https://apps.fedoraproject.org/fedmenu")
        .with("fedmenu.data_url", "https://apps.fedoraproject.org/js/data.js");
    let view: ViewModel = update(&[("kernel-4.2.3-300.fc23", "kernel")]).into();
    let json = FedMenu::from_settings(&settings, &view).unwrap().config_json().unwrap();

    let keys = ["\"url\"", "\"mimeType\"", "\"position\"", "\"user\"", "\"package\""];
    let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_config_json_cannot_break_out_of_script() {
    let settings = Settings::new().with("fedmenu.url", "https://apps.fedoraproject.org/fedmenu");
    let view: ViewModel = UserProfile { name: "</script><!--<script>".into() }.into();
    let json = FedMenu::from_settings(&settings, &view).unwrap().config_json().unwrap();

    assert!(!json.contains('<'));
    assert!(json.contains(r#""user": "\u003c/script>\u003c!--\u003cscript>""#));
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["user"], "</script><!--<script>");
}
