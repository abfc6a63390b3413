use std::path::Path;
use std::process::{Command, Output};
use tempfile::{TempDir, tempdir};

const ENV_OVERRIDES: &[&str] = &[
    "SPORT_SCHEDULE_PROVIDER",
    "SPORT_SCHEDULE_API_KEY",
    "SPORT_SCHEDULE_LOG_FILE",
    "SPORT_SCHEDULE_HTTP_TIMEOUT",
];

/// Runs the binary with its config and log directories inside `home`.
fn run_binary(home: &Path, args: &[&str]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_sport_schedule"));
    command
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1");
    for name in ENV_OVERRIDES {
        command.env_remove(name);
    }
    command.output().expect("binary runs")
}

fn home() -> TempDir {
    tempdir().unwrap()
}

fn stderr_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_invalid_date_exits_with_one_error_line() {
    let home = home();
    let log_file = home.path().join("logs").join("run.log");
    let output = run_binary(
        home.path(),
        &[
            "--league",
            "nba",
            "--date",
            "15/03/2024",
            "--log-file",
            &log_file.to_string_lossy(),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let lines = stderr_lines(&output);
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(
        lines[0].starts_with("Error: Invalid date format: '15/03/2024'"),
        "{}",
        lines[0]
    );
}

#[test]
fn test_fan_out_standings_rejected_before_any_setup() {
    let home = home();
    let output = run_binary(home.path(), &["--standings"]);

    assert_eq!(output.status.code(), Some(1));
    let lines = stderr_lines(&output);
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(
        lines[0].starts_with("Error: Configuration error: --standings requires a single league"),
        "{}",
        lines[0]
    );
    assert!(!home.path().join(".config").exists());
}

#[test]
fn test_unusable_log_path_exits_with_log_setup_error() {
    let home = home();
    let blocker = home.path().join("not_a_dir");
    std::fs::write(&blocker, "plain file").unwrap();
    let log_file = blocker.join("run.log");

    let output = run_binary(
        home.path(),
        &["--league", "nba", "--log-file", &log_file.to_string_lossy()],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let lines = stderr_lines(&output);
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].starts_with("Error: Log setup error:"), "{}", lines[0]);
}

#[test]
fn test_list_config_uses_defaults_without_a_file() {
    let home = home();
    let output = run_binary(home.path(), &["--list-config"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No configuration file found at:"));
    assert!(stdout.contains("Provider:\nespn"), "{stdout}");
    assert!(stdout.contains("(not set)"));
}
