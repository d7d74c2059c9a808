//! Node descriptor files on disk.

use polyprism::{ConfigError, PolyNodeConfig};

const TOWER: &str = r#"
corner_count = 4
sampling = 3
floret_factor = 0.3
base_sizes = [1.2]
top_sizes = [1.0]
summit_angles_deg = [45.0, 135.0, 225.0, 315.0]
poly_heights = [2.0, 2.5]
slope = 0.6
curving = true
cut_off = 0.4
band_limits = [0.5, 0.9]
band_blend_factor = 1.0
"#;

#[test]
fn test_load_and_generate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tower.toml");
    std::fs::write(&path, TOWER).unwrap();

    let node = PolyNodeConfig::load(&path).unwrap();
    assert_eq!(node.corner_count, 4);
    assert!(node.curving);

    let spec = node.to_polygon_spec();
    assert_eq!(spec.effective_corner_count(), 12);
    let thresholds = spec.band_thresholds();
    assert_eq!(thresholds.len(), 2);
    assert!((thresholds[0] - 1.25).abs() < 1e-5);
    assert!((thresholds[1] - 2.25).abs() < 1e-5);
    assert!((spec.cut_off() - 0.4).abs() < f32::EPSILON);

    let mesh = node.generate();
    assert_eq!(mesh.vertex_count(), spec.layout().vertices_len());
    assert_eq!(mesh.band_count(), 4);
    assert!(mesh.vertices.iter().all(|v| v.is_finite()));
}

#[test]
fn test_save_then_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nodes").join("saved.toml");

    let node = PolyNodeConfig {
        corner_count: 8,
        poly_heights: vec![1.0, 3.0],
        band_limits: vec![0.5],
        ..Default::default()
    };
    node.save(&path).unwrap();

    assert_eq!(PolyNodeConfig::load(&path).unwrap(), node);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = PolyNodeConfig::load(&dir.path().join("missing.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "sampling = [").unwrap();

    let err = PolyNodeConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("TOML parse error"));
}
