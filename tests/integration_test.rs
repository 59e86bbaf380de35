// tests/integration_test.rs
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const CONFIG: &str = r#"
[[packages]]
name = "react"
changelog = "packages/react/CHANGELOG.md"
flavor = "React"

[[packages]]
name = "vue"
changelog = "packages/vue/CHANGELOG.md"
flavor = "Vue"
"#;

fn setup_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    git2::Repository::init(dir.path()).unwrap();
    fs::write(dir.path().join("docsync.toml"), CONFIG).unwrap();
    dir
}

fn write_changelog(root: &Path, package: &str, text: &str) {
    let dir = root.join("packages").join(package);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("CHANGELOG.md"), text).unwrap();
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_docs-sync"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_docs_sync_help() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("docs-sync"));
    assert!(stdout.contains("documentation-update prompt"));
}

#[test]
fn test_docs_sync_version() {
    let dir = TempDir::new().unwrap();
    let output = run(dir.path(), &["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("docs-sync "));
}

#[test]
fn test_prompt_to_stdout_from_discovered_root() {
    let repo = setup_repo();
    write_changelog(
        repo.path(),
        "react",
        "## [4.87.0]\n- Added widget X\n- Fixed bug Y in component Z\n## [4.86.0]\n- Older entry\n",
    );
    let nested = repo.path().join("packages/react");

    // Config path is explicit because the working directory is nested below the root
    let config_path = repo.path().join("docsync.toml");
    let output = run(&nested, &["--config", config_path.to_str().unwrap()]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("# Documentation Update"));
    assert!(stdout.contains("- react (React): 4.87.0"));
    assert!(!stdout.contains("Older entry"));
}

#[test]
fn test_writes_artifacts() {
    let repo = setup_repo();
    write_changelog(
        repo.path(),
        "vue",
        "## 3.1.0\n- Added the `dense` prop to data tables\n",
    );

    let output = run(
        repo.path(),
        &["--output", "out/prompt.md", "--packages-info", "out/info.json"],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());

    let prompt = fs::read_to_string(repo.path().join("out/prompt.md")).unwrap();
    assert!(prompt.contains("### vue 3.1.0"));

    let info = fs::read_to_string(repo.path().join("out/info.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&info).unwrap();
    assert_eq!(parsed, serde_json::json!([{ "name": "vue", "version": "3.1.0" }]));
}

#[test]
fn test_nothing_to_do_exits_cleanly() {
    let repo = setup_repo();
    write_changelog(repo.path(), "react", "## [4.87.1]\n- bump\n");

    let output = run(
        repo.path(),
        &["--verbose", "--output", "prompt.md", "--packages-info", "info.json"],
    );

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Nothing to do"));
    assert!(stderr.contains("Skipping 'vue'"));
    assert!(!repo.path().join("prompt.md").exists());
    assert!(!repo.path().join("info.json").exists());
}

#[test]
fn test_unreadable_changelog_exits_non_zero() {
    let repo = setup_repo();
    fs::create_dir_all(repo.path().join("packages/react/CHANGELOG.md")).unwrap();

    let output = run(repo.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read changelog"));
}

#[test]
fn test_list_packages() {
    let repo = setup_repo();
    let output = run(repo.path(), &["--list"]);

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("react (React): packages/react/CHANGELOG.md"));
}
