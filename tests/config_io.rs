mod common;

use common::synthetic_lines::converging;
use std::fs;
use vanishing_point::cluster::MembershipRule;
use vanishing_point::config::{vp_demo, ConfigError};
use vanishing_point::io::{load_segments, write_json_file};
use vanishing_point::VanishingPointEstimator;

#[test]
fn demo_config_round_trip_through_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let segments_path = dir.path().join("segments.json");
    let segments = converging(250.0, 140.0, 8);
    write_json_file(&segments_path, &segments).expect("write segments");

    let config_path = dir.path().join("config.json");
    let config_json = serde_json::json!({
        "input": segments_path,
        "estimator": { "membership": "nearest" },
        "image_size": [640, 480],
        "output": { "result_json": dir.path().join("out/vp.json") }
    });
    fs::write(&config_path, config_json.to_string()).expect("write config");

    let config = vp_demo::load_config(&config_path).expect("config loads");
    assert_eq!(config.params.membership, MembershipRule::Nearest);
    assert_eq!(config.params, config.estimator.resolve().unwrap());
    assert_eq!(config.image_size, Some([640, 480]));

    let loaded = load_segments(&config.input).expect("segments load");
    assert_eq!(loaded, segments);
    let estimator = VanishingPointEstimator::new(config.params.clone());
    assert_eq!(estimator.params(), &config.params);
    let report = estimator.estimate_with_diagnostics(&loaded);
    assert_eq!(report.vanishing_point(), Some((250, 140)));

    write_json_file(&config.output.result_json, &report).expect("nested dirs are created");
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&config.output.result_json).unwrap()).unwrap();
    assert_eq!(written["outcome"]["status"], "selected");
    assert_eq!(written["outcome"]["x"], 250);
    assert_eq!(written["sweep"]["pairsEvaluated"], 28);
    assert_eq!(written["sweep"]["degeneratePairs"], 0);
}

#[test]
fn invalid_estimator_section_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{ "input": "s.json", "estimator": { "min_lines": 9, "max_lines": 3 }, "output": { "result_json": "o.json" } }"#,
    )
    .unwrap();
    let err = vp_demo::load_config(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::Params(_)), "got {err}");
}

#[test]
fn malformed_config_is_a_json_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join("config.json");
    fs::write(&config_path, r#"{ "estimator": {} }"#).unwrap();
    let err = vp_demo::load_config(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)), "got {err}");
}
