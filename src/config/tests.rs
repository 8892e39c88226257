//! Tests for CLI parsing and pipeline configuration

use super::*;
use crate::Error;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_parse_run_defaults() {
    let cli = parse_args(["clasificador", "run"]).unwrap();
    match cli.command {
        Command::Run(args) => {
            assert_eq!(args.data_dir, PathBuf::from("data"));
            assert!(args.config.is_none());
            assert!(args.output.is_none());
        }
        Command::Inspect(_) => panic!("expected run"),
    }
    assert!(!cli.verbose);
    assert!(!cli.quiet);
}

#[test]
fn test_parse_run_overrides() {
    let cli = parse_args([
        "clasificador",
        "-v",
        "run",
        "--data-dir",
        "/tmp/titanic",
        "--output",
        "/tmp/out.csv",
    ])
    .unwrap();
    assert!(cli.verbose);
    let Command::Run(args) = cli.command else {
        panic!("expected run");
    };

    let config = resolve_run_config(&args).unwrap();
    assert_eq!(config.training_path, PathBuf::from("/tmp/titanic/train.csv"));
    assert_eq!(config.inference_path, PathBuf::from("/tmp/titanic/test.csv"));
    assert_eq!(config.output_path, PathBuf::from("/tmp/out.csv"));
}

#[test]
fn test_parse_inspect_rows() {
    let cli = parse_args(["clasificador", "inspect", "-n", "3", "--train", "x.csv"]).unwrap();
    let Command::Inspect(args) = cli.command else {
        panic!("expected inspect");
    };
    assert_eq!(args.rows, 3);
    assert_eq!(args.training_path(), PathBuf::from("x.csv"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    assert!(parse_args(["clasificador", "-v", "-q", "run"]).is_err());
}

#[test]
fn test_unknown_command_rejected() {
    assert!(parse_args(["clasificador", "serve"]).is_err());
}

#[test]
fn test_default_config_matches_data_layout() {
    let config = PipelineConfig::default();
    assert_eq!(config.training_path, PathBuf::from("data/train.csv"));
    assert_eq!(config.inference_path, PathBuf::from("data/test.csv"));
    assert_eq!(config.output_path, PathBuf::from("data/predictions.csv"));
    assert_eq!(config.label_column, "Survived");
    assert_eq!(config.prediction_column, "Survived_pred");
    assert_eq!(config.split.seed, 42);
    assert_eq!(config.model.max_iter, 1000);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_bad_fraction() {
    let mut config = PipelineConfig::default();
    config.split.validation_fraction = 1.0;
    let err = config.validate().unwrap_err();
    assert!(matches!(err, Error::ConfigValue { ref field, .. } if field == "split.validation_fraction"));
}

#[test]
fn test_validate_rejects_zero_iterations() {
    let mut config = PipelineConfig::default();
    config.model.max_iter = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_blank_label() {
    let mut config = PipelineConfig::default();
    config.label_column = " ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_load_config_minimal_yaml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pipeline.yaml");
    std::fs::write(
        &path,
        r#"
training_path: in/train.csv
inference_path: in/test.csv
output_path: out/predictions.csv
split:
  seed: 7
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.training_path, PathBuf::from("in/train.csv"));
    assert_eq!(config.split.seed, 7);
    assert!((config.split.validation_fraction - 0.2).abs() < f64::EPSILON);
    assert_eq!(config.features.candidates.len(), 6);
}

#[test]
fn test_load_config_custom_features() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pipeline.yaml");
    std::fs::write(
        &path,
        r#"
training_path: a.csv
inference_path: b.csv
output_path: c.csv
label_column: target
features:
  candidates: [x, color]
  median_fill: [x]
  constant_fill:
    - column: color
      value: red
  family_size: null
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.label_column, "target");
    assert_eq!(config.features.candidates, vec!["x", "color"]);
    assert_eq!(config.features.constant_fill[0].value, "red");
    assert!(config.features.family_size.is_none());
    assert!(config.features.drop_first);
}

#[test]
fn test_load_config_unknown_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pipeline.yaml");
    std::fs::write(
        &path,
        "training_path: a\ninference_path: b\noutput_path: c\nlearning_rate: 3\n",
    )
    .unwrap();
    assert!(matches!(
        load_config(&path).unwrap_err(),
        Error::ConfigParsing { .. }
    ));
}

#[test]
fn test_load_config_invalid_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pipeline.yaml");
    std::fs::write(
        &path,
        "training_path: a\ninference_path: b\noutput_path: c\nmodel:\n  c: 0\n",
    )
    .unwrap();
    assert!(matches!(
        load_config(&path).unwrap_err(),
        Error::ConfigValue { .. }
    ));
}

#[test]
fn test_config_file_paths_then_cli_overrides() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pipeline.yaml");
    std::fs::write(
        &path,
        "training_path: a.csv\ninference_path: b.csv\noutput_path: c.csv\n",
    )
    .unwrap();

    let args = RunArgs {
        data_dir: PathBuf::from("ignored"),
        config: Some(path),
        train: None,
        test: Some(PathBuf::from("other.csv")),
        output: None,
    };
    let config = resolve_run_config(&args).unwrap();
    assert_eq!(config.training_path, PathBuf::from("a.csv"));
    assert_eq!(config.inference_path, PathBuf::from("other.csv"));
}
