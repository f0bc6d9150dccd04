use std::fs;

use approx::assert_abs_diff_eq;
use kbcase::{
    build_plan_from_file, build_plan_from_str, load_config, write_outputs, CaseConfig,
    LayoutContext, LayoutError,
};

const SPLIT_BOARD: &str = r#"[
    {"name": "tiny split", "author": "kbcase"},
    ["Q", "W", "E", "R", "T", "Y"],
    [{"w": 1.25}, "A", "S", "D", "F", "G", "H"]
]"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn yaml_config_splits_the_board() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("case.yaml");
    fs::write(
        &config_path,
        "split_gap: 2.0\nsplit_keys:\n  - [1, 3]\n  - [2, 3]\nfront_height: 10.0\n",
    )
    .unwrap();
    let layout_path = dir.path().join("board.json");
    fs::write(&layout_path, SPLIT_BOARD).unwrap();

    let config = load_config(&config_path).unwrap();
    assert_abs_diff_eq!(config.split_gap, 2.0);
    assert_abs_diff_eq!(config.unit, 19.0);

    let plan = build_plan_from_file(&layout_path, config).unwrap();
    assert_eq!(plan.layout.name.as_deref(), Some("tiny split"));
    assert_eq!(plan.layout.keys.len(), 12);
    assert!(plan.layout.is_split());
    assert_eq!(plan.outlines.len(), 2);
    assert_abs_diff_eq!(plan.tilt.front_height, 10.0);

    let left = &plan.layout.left.points;
    let right = &plan.layout.right.points;
    assert_abs_diff_eq!(right[1].x - left[1].x, 2.0, epsilon = 1e-9);
}

#[test]
fn json_config_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("case.json");
    fs::write(&config_path, r#"{"panel_padding": 5.0}"#).unwrap();
    let config = load_config(&config_path).unwrap();
    assert_abs_diff_eq!(config.panel_padding, 5.0);
}

#[test]
fn unknown_config_field_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("case.yaml");
    fs::write(&config_path, "unit_size: 19\n").unwrap();
    let err = load_config(&config_path).unwrap_err();
    assert!(format!("{err}").contains("Failed to parse config file"));
}

#[test]
fn invalid_config_is_reported_before_reading_layout() {
    let dir = tempfile::tempdir().unwrap();
    let config = CaseConfig {
        unit: -1.0,
        ..CaseConfig::default()
    };
    let err = build_plan_from_file(&dir.path().join("missing.json"), config).unwrap_err();
    assert_eq!(format!("{err}"), "Invalid case configuration");
}

#[test]
fn missing_layout_keeps_the_source_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = build_plan_from_file(&dir.path().join("missing.json"), CaseConfig::default())
        .unwrap_err();
    assert!(format!("{err}").starts_with("Failed to load KLE layout"));
    assert!(matches!(
        err.downcast_ref::<LayoutError>(),
        Some(LayoutError::Io { .. })
    ));
}

#[test]
fn plan_from_text() {
    let plan = build_plan_from_str(&LayoutContext::default(), SPLIT_BOARD).unwrap();
    assert!(!plan.layout.is_split());
    assert_eq!(plan.outlines.len(), 1);
    assert_eq!(plan.layout.author.as_deref(), Some("kbcase"));
}

#[test]
fn bad_text_has_context() {
    let err = build_plan_from_str(&LayoutContext::default(), "{}").unwrap_err();
    assert_eq!(format!("{err}"), "Failed to parse KLE layout");
    assert!(matches!(err.downcast_ref::<LayoutError>(), Some(LayoutError::Root)));
}

#[test]
fn outputs_are_written() {
    let plan = build_plan_from_str(&LayoutContext::default(), SPLIT_BOARD).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    write_outputs(&plan, &out).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("plan.json")).unwrap()).unwrap();
    assert_eq!(json["layout"]["keys"].as_array().unwrap().len(), 12);
    let svg = fs::read_to_string(out.join("preview.svg")).unwrap();
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains("id=\"outline\""));
}
