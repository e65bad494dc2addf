use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::{tempdir, TempDir};

fn arc_boosts(dir: &TempDir) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_arc-boosts"));
    // Keep the user's global settings out of the way
    command
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    command
}

fn run_with_stdin(dir: &TempDir, stdin: &str) -> Output {
    let mut child = arc_boosts(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn arc-boosts");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn registry_json(dir: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(dir.join("arc-boosts.json")).unwrap()).unwrap()
}

#[test]
fn test_cli_help_command() {
    let dir = tempdir().unwrap();

    let output = arc_boosts(&dir).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("--add"));
    assert!(stdout.contains("--sync"));
    assert!(!dir.path().join("arc-boosts.json").exists());
}

#[test]
fn test_cli_add_creates_registry_and_readme() {
    let dir = tempdir().unwrap();

    let output = arc_boosts(&dir)
        .args(["-a", "Tools", "foo", "https://arc.net/boost/foo", "1.0.0"])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        registry_json(dir.path()),
        serde_json::json!({
            "Tools": { "foo": { "link": "https://arc.net/boost/foo", "version": "1.0.0" } }
        })
    );
    let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.contains("[s1-e1]: https://arc.net/boost/foo"));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Added 1 new boost(s)"));
}

#[test]
fn test_cli_add_with_invalid_link_fails_without_side_effects() {
    let dir = tempdir().unwrap();

    let output = arc_boosts(&dir)
        .args(["-a", "Tools", "foo", "https://example.com/boost/foo", "1.0.0"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid link"));
    assert!(!dir.path().join("arc-boosts.json").exists());
    assert!(!dir.path().join("README.md").exists());
}

#[test]
fn test_cli_add_with_invalid_version_fails() {
    let dir = tempdir().unwrap();

    let output = arc_boosts(&dir)
        .args(["-a", "Tools", "foo", "https://arc.net/boost/foo", "1.2"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("arc-boosts.json").exists());
}

#[test]
fn test_cli_wrong_shape_is_a_usage_error() {
    let dir = tempdir().unwrap();

    for args in [
        vec!["-a", "Tools", "foo"],
        vec!["stray"],
        vec!["-s", "-a", "Tools", "foo", "https://arc.net/boost/foo", "1.0.0"],
    ] {
        let output = arc_boosts(&dir).args(&args).output().unwrap();
        assert_eq!(output.status.code(), Some(2), "args: {args:?}");
    }
    assert!(!dir.path().join("arc-boosts.json").exists());
    assert!(!dir.path().join("README.md").exists());
}

#[test]
fn test_cli_sync_rerenders_from_registry() {
    let dir = tempdir().unwrap();
    let json = r#"{"Reading": {"description": "Long reads", "news": {"link": "https://arc.net/boost/news", "version": "0.3.1"}}}"#;
    fs::write(dir.path().join("arc-boosts.json"), json).unwrap();

    let output = arc_boosts(&dir).arg("-s").output().unwrap();

    assert!(output.status.success());
    let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
    assert!(readme.contains("## Reading\n\nLong reads\n"));
    assert!(readme.contains("`v0.3.1`"));
    // The registry itself is not rewritten
    assert_eq!(fs::read_to_string(dir.path().join("arc-boosts.json")).unwrap(), json);
}

#[test]
fn test_cli_malformed_registry_degrades_to_empty() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("arc-boosts.json"), "{not json").unwrap();

    let output = arc_boosts(&dir)
        .args(["-a", "Tools", "foo", "https://arc.net/boost/foo", "1.0.0"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("starting from an empty one"));
    assert_eq!(
        registry_json(dir.path())["Tools"]["foo"]["version"],
        serde_json::json!("1.0.0")
    );
}

#[test]
fn test_cli_interactive_session() {
    let dir = tempdir().unwrap();

    let output = run_with_stdin(
        &dir,
        "Tools\nDeveloper helpers\nfoo\nhttps://arc.net/boost/foo\n\nTools\nfoo\nhttps://arc.net/boost/foo2\n\nexit\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Welcome to Arc Boosts Manager!"));
    assert!(stdout.contains("Exiting..."));

    let registry = registry_json(dir.path());
    assert_eq!(registry["Tools"]["description"], serde_json::json!("Developer helpers"));
    assert_eq!(registry["Tools"]["foo"]["version"], serde_json::json!("1.0.1"));
    assert_eq!(
        registry["Tools"]["foo"]["link"],
        serde_json::json!("https://arc.net/boost/foo2")
    );
}

#[test]
fn test_cli_settings_file_and_overrides() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("arc-boosts.yaml"),
        "title: Team Boosts\ndocument_file: docs/BOOSTS.md\n",
    )
    .unwrap();

    let output = arc_boosts(&dir)
        .args([
            "--registry",
            "data/boosts.json",
            "-a",
            "Tools",
            "foo",
            "https://arc.net/boost/foo",
            "1.0.0",
        ])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(dir.path().join("data/boosts.json").exists());
    let document = fs::read_to_string(dir.path().join("docs/BOOSTS.md")).unwrap();
    assert!(document.starts_with("# Team Boosts\n"));
}
