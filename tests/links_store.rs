use team_portal::links::{default_links, load_links, save_links, LinkEntry, LinkStore};
use tempfile::tempdir;

fn entry(title: &str, url: &str, icon: &str) -> LinkEntry {
    LinkEntry {
        title: title.into(),
        url: url.into(),
        icon: icon.into(),
    }
}

#[test]
fn fresh_load_uses_builtin_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("links.json");
    let store = LinkStore::open(path.to_str().unwrap());

    assert_eq!(store.entries(), default_links().as_slice());
    assert_eq!(store.len(), 6);
    assert_eq!(store.entries()[0].title, "Mail");
    assert_eq!(store.entries()[5].title, "Helpdesk");
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("links.json");
    let list = vec![
        entry("Wiki", "https://wiki.example.com", "W"),
        entry("CI", "https://ci.example.com", ""),
    ];

    save_links(path.to_str().unwrap(), &list).unwrap();
    let loaded = load_links(path.to_str().unwrap());

    assert_eq!(loaded, list);
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("links.json");
    std::fs::write(&path, "{not json").unwrap();

    let loaded = load_links(path.to_str().unwrap());

    assert_eq!(loaded, default_links());
}

#[test]
fn add_appends_exactly_one_entry_at_the_end() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("links.json");
    let mut store = LinkStore::open(path.to_str().unwrap());
    let before = store.entries().to_vec();

    store
        .add(entry("  Status  ", " https://status.example.com ", ""))
        .unwrap();

    assert_eq!(store.len(), before.len() + 1);
    assert_eq!(&store.entries()[..before.len()], before.as_slice());
    let added = store.entries().last().unwrap();
    assert_eq!(added.title, "Status");
    assert_eq!(added.url, "https://status.example.com");

    // the mutation is persisted synchronously
    let loaded = load_links(path.to_str().unwrap());
    assert_eq!(loaded, store.entries());
}

#[test]
fn add_with_empty_title_is_rejected_without_persisting() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("links.json");
    let mut store = LinkStore::open(path.to_str().unwrap());
    let before = store.entries().to_vec();

    assert!(store.add(entry("   ", "https://x.example.com", "")).is_err());
    assert!(store.add(entry("X", "   ", "")).is_err());

    assert_eq!(store.entries(), before.as_slice());
    assert!(!path.exists(), "rejected add must not touch the file");
}

#[test]
fn edit_at_replaces_only_the_target() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("links.json");
    let mut store = LinkStore::open(path.to_str().unwrap());
    let before = store.entries().to_vec();

    store
        .edit_at(2, entry("Docs", "https://docs.example.com", "D"))
        .unwrap();

    assert_eq!(store.len(), before.len());
    assert_eq!(store.entries()[2].title, "Docs");
    for (idx, old) in before.iter().enumerate() {
        if idx != 2 {
            assert_eq!(&store.entries()[idx], old);
        }
    }
}

#[test]
fn edit_at_out_of_range_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("links.json");
    let mut store = LinkStore::open(path.to_str().unwrap());
    let before = store.entries().to_vec();

    assert!(store
        .edit_at(99, entry("X", "https://x.example.com", ""))
        .is_err());

    assert_eq!(store.entries(), before.as_slice());
    assert!(!path.exists());
}

#[test]
fn reset_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("links.json");
    let mut store = LinkStore::open(path.to_str().unwrap());

    store.add(entry("Extra", "https://extra.example.com", "")).unwrap();
    store.reset_to_default().unwrap();
    let once = store.entries().to_vec();
    store.reset_to_default().unwrap();

    assert_eq!(store.entries(), once.as_slice());
    assert_eq!(store.entries(), default_links().as_slice());
}
