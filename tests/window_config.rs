use snippet_launcher::window_config::{WindowConfig, DEFAULT_WINDOW_SIZE};
use tempfile::tempdir;

#[test]
fn missing_file_gives_default_geometry() {
    let dir = tempdir().unwrap();
    let cfg = WindowConfig::load(&dir.path().join("config.json"));
    assert_eq!(cfg, WindowConfig::default());
    assert_eq!(cfg.size_or_default(), DEFAULT_WINDOW_SIZE);
    assert_eq!(cfg.position(), None);
}

#[test]
fn corrupt_file_gives_default_geometry() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, b"{\"width\": 400, \"height\":").unwrap();
    let cfg = WindowConfig::load(&path);
    assert_eq!(cfg, WindowConfig::default());
}

#[test]
fn save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    let cfg = WindowConfig::new((360, 640), (-20, 15));
    cfg.save(&path).unwrap();
    let loaded = WindowConfig::load(&path);
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.size(), Some((360.0, 640.0)));
    assert_eq!(loaded.position(), Some((-20.0, 15.0)));
}

#[test]
fn missing_coordinates_only_skip_position() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "width": 300, "height": 500, "x": 10 }"#).unwrap();
    let cfg = WindowConfig::load(&path);
    assert_eq!(cfg.size(), Some((300.0, 500.0)));
    assert_eq!(cfg.position(), None);
}
