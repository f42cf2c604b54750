//! Configuration file loading

use chart_studio::command::commands;
use chart_studio::{ConfigError, EditorConfig, EditorHistories, Handle, Layer, SurfaceKind};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "(\n    history: (\n        max_depth: Some(3),\n    ),\n)").unwrap();

    let config = EditorConfig::load(file.path()).unwrap();
    assert_eq!(config.history.max_depth, Some(3));
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("editor.ron");

    let mut config = EditorConfig::default();
    config.history.max_depth = Some(42);
    config.save(&path).unwrap();

    assert_eq!(EditorConfig::load(&path).unwrap(), config);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = EditorConfig::load(dir.path().join("absent.ron")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_loaded_depth_caps_every_surface() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "(history: (max_depth: Some(2)))").unwrap();
    let config = EditorConfig::load(file.path()).unwrap();

    let mut histories = EditorHistories::new(&config);
    let layer = Handle::new(Layer::new("A").unwrap());
    for name in ["B", "C", "D", "E"] {
        histories.push(commands::rename_layer(&layer, name)).unwrap();
    }

    assert_eq!(histories.branch(SurfaceKind::Chart).undo_count(), 2);
    assert_eq!(histories.branch(SurfaceKind::Stage).max_depth(), Some(2));
}
