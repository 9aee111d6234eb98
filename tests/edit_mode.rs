use team_portal::gui::PortalApp;
use team_portal::links::LinkStore;
use team_portal::news::NewsStore;
use team_portal::settings::Settings;
use tempfile::tempdir;

fn app_in(dir: &std::path::Path) -> PortalApp {
    let links = LinkStore::open(dir.join("links.json").to_str().unwrap());
    let news = NewsStore::open(dir.join("news.json").to_str().unwrap());
    let settings_path = dir.join("settings.json");
    PortalApp::new(
        Settings::default(),
        links,
        news,
        settings_path.to_str().unwrap(),
    )
}

#[test]
fn edit_mode_starts_disabled() {
    let dir = tempdir().unwrap();
    let app = app_in(dir.path());

    assert!(!app.edit_mode());
    assert!(!app.admin_news());
}

#[test]
fn toggle_enables_admin_affordances() {
    let dir = tempdir().unwrap();
    let mut app = app_in(dir.path());

    app.toggle_edit_mode();

    assert!(app.edit_mode());
    assert!(app.admin_news());
}

#[test]
fn double_toggle_restores_state() {
    let dir = tempdir().unwrap();
    let mut app = app_in(dir.path());

    app.toggle_edit_mode();
    app.toggle_edit_mode();

    assert!(!app.edit_mode());
    assert!(!app.admin_news());
}
