use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary inside `dir`, with HOME pointed at it so no user presets leak in.
fn runner_gen(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("runner_gen").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("RUST_LOG", "info");
    cmd
}

fn mandatory_args() -> [&'static str; 8] {
    [
        "--source-features",
        "features/login.feature:12",
        "--source-runner-template-file",
        "templates/Runner.java",
        "--generated-feature-directory",
        "target/features",
        "--generated-runner-directory",
        "target/runners",
    ]
}

#[test]
fn valid_settings_are_reported() {
    let dir = TempDir::new().unwrap();

    runner_gen(&dir)
        .args(mandatory_args())
        .args(["--include-tags", "@smoke", "--exclude-tags", "@wip"])
        .assert()
        .success()
        .stderr(
            predicate::str::contains("features/login.feature")
                .and(predicate::str::contains("scenario line number"))
                .and(predicate::str::contains("@smoke"))
                .and(predicate::str::contains("@wip")),
        );
}

#[test]
fn malformed_include_tag_aborts() {
    let dir = TempDir::new().unwrap();

    runner_gen(&dir)
        .args(mandatory_args())
        .args(["--include-tags", "smoke"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Include tag 'smoke' does not start with '@'.",
        ));
}

#[test]
fn malformed_exclude_tag_aborts() {
    let dir = TempDir::new().unwrap();

    runner_gen(&dir)
        .args(mandatory_args())
        .args(["--exclude-tags", "@ok", "wip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Exclude tag 'wip' does not start with '@'.",
        ));
}

#[test]
fn report_file_is_written() {
    let dir = TempDir::new().unwrap();
    let report = dir.path().join("settings.txt");

    runner_gen(&dir)
        .args(mandatory_args())
        .arg("--report")
        .arg(&report)
        .assert()
        .success();

    let content = std::fs::read_to_string(&report).unwrap();
    assert_eq!(content.lines().count(), 6);
    assert!(content.contains("templates/Runner.java"));
    assert!(content.ends_with('\n'));
}

#[test]
fn presets_file_supplies_settings() {
    let dir = TempDir::new().unwrap();
    let presets = dir.path().join("presets.toml");
    std::fs::write(
        &presets,
        r#"
[nightly]
source_features = "features"
source_runner_template_file = "Runner.java"
generated_feature_directory = "out/features"
generated_runner_directory = "out/runners"
exclude_tags = ["@flaky"]
"#,
    )
    .unwrap();

    runner_gen(&dir)
        .arg("--config")
        .arg(&presets)
        .args(["--preset", "nightly"])
        .assert()
        .success()
        .stderr(
            predicate::str::contains("out/runners")
                .and(predicate::str::contains("all scenarios"))
                .and(predicate::str::contains("@flaky")),
        );
}

#[test]
fn missing_mandatory_setting_aborts() {
    let dir = TempDir::new().unwrap();

    runner_gen(&dir)
        .args(["--source-features", "a.feature"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--source-runner-template-file"));
}
