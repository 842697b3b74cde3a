mod common;

use common::{run_triage, TestEnv};

#[test]
fn triage_help_shows_usage() {
    let output = run_triage(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "--help should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("summarize"));
}

#[test]
fn triage_version_shows_version() {
    let output = run_triage(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("triage "));
}

#[test]
fn completions_bash_outputs_script() {
    let output = run_triage(&["completions", "bash"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "completions bash should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(
        stdout.contains("triage"),
        "expected completion output to reference command name\nstdout:\n{}",
        stdout
    );
}

#[test]
fn models_lists_menu_order_and_prices() {
    let output = run_triage(&["models"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    let turbo = stdout.find("gpt-4-turbo").expect("gpt-4-turbo listed");
    let cheap = stdout.find("gpt-3.5-turbo").expect("gpt-3.5-turbo listed");
    let omni = stdout.find("gpt-4o").expect("gpt-4o listed");
    assert!(turbo < cheap && cheap < omni);
    assert!(stdout.contains("unpriced"));
    assert!(stdout.contains("$0.0005"));
}

#[test]
fn config_show_works() {
    let output = run_triage(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        output.status.success(),
        "config show should succeed\nstdout:\n{}\nstderr:\n{}",
        stdout,
        stderr
    );
    assert!(stdout.contains("[general]"));
    assert!(stdout.contains("records_dir"));
}

#[test]
fn config_show_masks_api_key() {
    let env = TestEnv::new();
    env.write_config("[llm]\napi_key = \"sk-very-secret\"\n");

    let output = env.run(&["config", "show"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(!stdout.contains("sk-very-secret"));
    assert!(stdout.contains("********"));
}

#[test]
fn config_path_returns_valid_path() {
    let output = run_triage(&["config", "path"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let env = TestEnv::new();

    let first = env.run(&["config", "init"]);
    assert!(first.status.success());
    assert!(env.config_path().exists());

    let second = env.run(&["config", "init"]);
    assert!(!second.status.success());
    assert!(String::from_utf8_lossy(&second.stderr).contains("--force"));

    let forced = env.run(&["config", "init", "--force"]);
    assert!(forced.status.success());
}
