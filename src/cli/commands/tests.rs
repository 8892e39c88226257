//! CLI command tests
//!
//! Tests for CLI command implementations against temporary data directories.

use super::*;
use crate::cli::LogLevel;
use crate::config::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TRAIN_CSV: &str = "\
PassengerId,Survived,Pclass,Sex,Age,SibSp,Parch,Fare,Embarked
1,0,3,male,22,1,0,7.25,S
2,1,1,female,38,1,0,71.28,C
3,1,3,female,26,0,0,7.92,S
4,1,1,female,35,1,0,53.1,S
5,0,3,male,35,0,0,8.05,S
6,0,3,male,,0,0,8.46,Q
7,0,1,male,54,0,0,51.86,S
8,0,3,male,2,3,1,21.07,S
9,1,3,female,27,0,2,11.13,S
10,1,2,female,14,1,0,30.07,C
";

const TEST_CSV: &str = "\
PassengerId,Pclass,Sex,Age,SibSp,Parch,Fare,Embarked
892,3,male,34.5,0,0,7.83,Q
893,3,female,47,1,0,7,S
894,2,male,,0,0,,
";

/// Create a data directory holding train.csv and test.csv
fn create_data_dir(dir: &TempDir) -> PathBuf {
    std::fs::write(dir.path().join("train.csv"), TRAIN_CSV).unwrap();
    std::fs::write(dir.path().join("test.csv"), TEST_CSV).unwrap();
    dir.path().to_path_buf()
}

fn run_args(data_dir: &Path) -> RunArgs {
    RunArgs {
        data_dir: data_dir.to_path_buf(),
        config: None,
        train: None,
        test: None,
        output: None,
    }
}

fn cli(command: Command, verbose: bool, quiet: bool) -> Cli {
    Cli {
        command,
        verbose,
        quiet,
    }
}

#[test]
fn test_log_level_from_flags() {
    let dir = TempDir::new().unwrap();
    let command = Command::Run(run_args(dir.path()));
    assert_eq!(log_level(&cli(command.clone(), false, false)), LogLevel::Normal);
    assert_eq!(log_level(&cli(command.clone(), true, false)), LogLevel::Verbose);
    assert_eq!(log_level(&cli(command, false, true)), LogLevel::Quiet);
}

#[test]
fn test_run_command_writes_predictions() {
    let dir = TempDir::new().unwrap();
    let data_dir = create_data_dir(&dir);

    let result = run::run_pipeline(run_args(&data_dir), LogLevel::Quiet);
    assert!(result.is_ok(), "{result:?}");

    let written = std::fs::read_to_string(data_dir.join("predictions.csv")).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "Survived_pred");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_run_command_verbose() {
    let dir = TempDir::new().unwrap();
    let data_dir = create_data_dir(&dir);

    let result = run::run_pipeline(run_args(&data_dir), LogLevel::Verbose);
    assert!(result.is_ok());
}

#[test]
fn test_run_command_output_override() {
    let dir = TempDir::new().unwrap();
    let data_dir = create_data_dir(&dir);
    let output = dir.path().join("nested.csv");

    let mut args = run_args(&data_dir);
    args.output = Some(output.clone());
    run::run_pipeline(args, LogLevel::Quiet).unwrap();

    assert!(output.exists());
    assert!(!data_dir.join("predictions.csv").exists());
}

#[test]
fn test_run_command_missing_data_dir() {
    let dir = TempDir::new().unwrap();
    let args = run_args(&dir.path().join("nope"));

    let err = run::run_pipeline(args, LogLevel::Quiet).unwrap_err();
    assert!(err.starts_with("[E001]"), "{err}");
    assert!(err.contains("train.csv"));
}

#[test]
fn test_run_command_missing_test_file() {
    let dir = TempDir::new().unwrap();
    let data_dir = create_data_dir(&dir);
    std::fs::remove_file(data_dir.join("test.csv")).unwrap();

    let result = run::run_pipeline(run_args(&data_dir), LogLevel::Quiet);
    assert!(result.is_err());
    assert!(!data_dir.join("predictions.csv").exists());
}

#[test]
fn test_run_command_with_config_file() {
    let dir = TempDir::new().unwrap();
    let data_dir = create_data_dir(&dir);
    let config_path = dir.path().join("pipeline.yaml");
    let output = dir.path().join("out.csv");
    std::fs::write(
        &config_path,
        format!(
            "training_path: {}\ninference_path: {}\noutput_path: {}\nprediction_column: pred\n",
            data_dir.join("train.csv").display(),
            data_dir.join("test.csv").display(),
            output.display()
        ),
    )
    .unwrap();

    let mut args = run_args(Path::new("unused"));
    args.config = Some(config_path);
    run::run_pipeline(args, LogLevel::Quiet).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("pred\n"));
}

#[test]
fn test_run_command_invalid_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("pipeline.yaml");
    std::fs::write(&config_path, "split:\n  validation_fraction: 1.5\n").unwrap();

    let mut args = run_args(dir.path());
    args.config = Some(config_path);
    assert!(run::run_pipeline(args, LogLevel::Quiet).is_err());
}

#[test]
fn test_inspect_command_basic() {
    let dir = TempDir::new().unwrap();
    let data_dir = create_data_dir(&dir);

    let args = InspectArgs {
        data_dir,
        train: None,
        rows: 3,
    };
    assert!(inspect::run_inspect(args, LogLevel::Quiet).is_ok());
}

#[test]
fn test_inspect_command_explicit_file_verbose() {
    let dir = TempDir::new().unwrap();
    let data_dir = create_data_dir(&dir);

    let args = InspectArgs {
        data_dir: PathBuf::from("unused"),
        train: Some(data_dir.join("test.csv")),
        rows: 0,
    };
    assert!(inspect::run_inspect(args, LogLevel::Verbose).is_ok());
}

#[test]
fn test_inspect_command_missing_file() {
    let dir = TempDir::new().unwrap();
    let args = InspectArgs {
        data_dir: dir.path().to_path_buf(),
        train: None,
        rows: 5,
    };
    let err = inspect::run_inspect(args, LogLevel::Quiet).unwrap_err();
    assert!(err.starts_with("[E001]"));
}

#[test]
fn test_run_command_dispatch() {
    let dir = TempDir::new().unwrap();
    let data_dir = create_data_dir(&dir);
    let parsed = parse_args([
        "clasificador",
        "--quiet",
        "run",
        "--data-dir",
        data_dir.to_str().unwrap(),
    ])
    .unwrap();

    assert!(run_command(parsed).is_ok());
    assert!(data_dir.join("predictions.csv").exists());
}
