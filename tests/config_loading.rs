mod common;

use std::io::Write;

use common::init_logging;
use qlearning::{Error, TableConfig, ValueTable};
use tempfile::NamedTempFile;

#[test]
fn table_built_from_config_file() {
    init_logging();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{ "initial_reward": 0.0, "learning_rate": 0.5, "discount_factor": 0.9 }}"#
    )
    .unwrap();

    let config = TableConfig::from_json_file(file.path()).unwrap();
    let mut table = ValueTable::from_config(["A", "B"], ["up", "down"], &config).unwrap();
    table.update(&"A", &"up", 10.0, &"B").unwrap();

    assert_eq!(table.value(&"A", &"up").unwrap(), 5.0);
    assert_eq!(table.hyperparameters(), config.hyperparameters());
}

#[test]
fn missing_config_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    match TableConfig::from_json_file(&path).unwrap_err() {
        Error::Io { operation, .. } => assert!(operation.contains("absent.json")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_config_file_reports_serialization_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "learning_rate = 0.5").unwrap();

    assert!(matches!(
        TableConfig::from_json_file(file.path()),
        Err(Error::Serialization(_))
    ));
}

#[test]
fn config_survives_json_encoding() {
    let config = TableConfig::default()
        .with_initial_reward(-1.0)
        .with_learning_rate(0.25);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(TableConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn infinite_learning_rate_rejected_at_construction() {
    let config = TableConfig::default().with_learning_rate(f64::INFINITY);
    assert!(matches!(
        ValueTable::from_config(["A"], ["up"], &config),
        Err(Error::InvalidConfiguration { .. })
    ));
}
