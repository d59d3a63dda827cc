//! Integration tests for demo config parsing and the demo reports.

use std::io::Write;

use labmath::MathError;
use labmath_cli::config::{load_demo_config, ComplexDemoConfig, DemoConfig, VectorDemoConfig};
use labmath_cli::demo::{complex_report, vector_report};

fn write_config(dir: &tempfile::TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("demo.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(json.as_bytes()).unwrap();
    path
}

// ---------------------------------------------------------------------------
// DemoConfig
// ---------------------------------------------------------------------------

#[test]
fn default_config_matches_demo_inputs() {
    let cfg = DemoConfig::default();
    assert_eq!(cfg.vector.a, Some(vec![1.0, 2.0, 3.0]));
    assert_eq!(cfg.vector.b, Some(vec![4.0, 5.0, 6.0]));
    assert_eq!(cfg.vector.scalar, 2.0);
    assert_eq!(cfg.complex.a, [3.0, 4.0]);
    assert_eq!(cfg.complex.b, [1.0, -2.0]);
}

#[test]
fn omitted_section_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, r#"{"complex": {"a": [0.0, 1.0]}}"#);
    let cfg = load_demo_config(&path).unwrap();
    assert_eq!(cfg.vector.a, Some(vec![1.0, 2.0, 3.0]));
    assert_eq!(cfg.vector.scalar, 2.0);
    assert_eq!(cfg.complex.a, [0.0, 1.0]);
    assert_eq!(cfg.complex.b, [1.0, -2.0]);
}

#[test]
fn omitted_scalar_uses_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, r#"{"vector": {"a": [1.0], "b": [2.0]}}"#);
    let cfg = load_demo_config(&path).unwrap();
    assert_eq!(cfg.vector.scalar, 2.0);
    assert_eq!(cfg.vector.a, Some(vec![1.0]));
}

#[test]
fn omitted_operand_is_null_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, r#"{"vector": {"b": [1.0, 2.0], "scalar": -1.5}}"#);
    let cfg = load_demo_config(&path).unwrap();
    assert_eq!(cfg.vector.a, None);
    assert_eq!(cfg.vector.scalar, -1.5);

    let err = vector_report(&cfg.vector).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MathError>(),
        Some(MathError::NullInput { .. })
    ));
}

#[test]
fn malformed_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "{ not json");
    let err = load_demo_config(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));
}

#[test]
fn config_round_trips_through_json() {
    let json = serde_json::to_string_pretty(&DemoConfig::default()).unwrap();
    assert!(json.contains("scalar"));
    let parsed: DemoConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.vector.a, Some(vec![1.0, 2.0, 3.0]));
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

#[test]
fn vector_report_defaults() {
    let lines = vector_report(&VectorDemoConfig::default()).unwrap();
    let norm = format!("|a| = {}", 14f64.sqrt());
    assert_eq!(
        lines,
        vec![
            "a = (1, 2, 3)",
            "b = (4, 5, 6)",
            "a + b = (5, 7, 9)",
            "a - b = (-3, -3, -3)",
            "a * 2 = (2, 4, 6)",
            norm.as_str(),
            "a · b = 32",
        ]
    );
}

#[test]
fn vector_report_missing_operand_is_null_input() {
    let cfg = VectorDemoConfig {
        a: None,
        ..VectorDemoConfig::default()
    };
    let err = vector_report(&cfg).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MathError>(),
        Some(MathError::NullInput { .. })
    ));
}

#[test]
fn vector_report_empty_operand_is_invalid() {
    let cfg = VectorDemoConfig {
        b: Some(vec![]),
        ..VectorDemoConfig::default()
    };
    let err = vector_report(&cfg).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<MathError>(),
        Some(MathError::InvalidArgument { .. })
    ));
}

#[test]
fn complex_report_defaults() {
    let lines = complex_report(&ComplexDemoConfig::default()).unwrap();
    assert_eq!(
        lines,
        vec![
            "3 + 4i", "1 - 2i", "4 + 2i", "2 + 6i", "11 - 2i", "-1 + 2i", "a is true", "5",
        ]
    );
}

#[test]
fn complex_report_zero_operand_is_not_true() {
    let cfg = ComplexDemoConfig {
        a: [0.0, 0.0],
        b: [1.0, 0.0],
    };
    let lines = complex_report(&cfg).unwrap();
    assert!(!lines.iter().any(|l| l == "a is true"));
    assert_eq!(lines.last().map(String::as_str), Some("0"));
}

#[test]
fn complex_report_zero_divisor_is_division_by_zero() {
    let cfg = ComplexDemoConfig {
        a: [1.0, 0.0],
        b: [0.0, 0.0],
    };
    let err = complex_report(&cfg).unwrap_err();
    assert_eq!(
        err.downcast_ref::<MathError>(),
        Some(&MathError::DivisionByZero)
    );
}
