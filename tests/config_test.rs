// tests/config_test.rs
use docs_sync::config::{load_config, Config, PackageConfig, DEFAULT_MIN_CONTENT_LENGTH};
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    let names: Vec<&str> = config.packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["js", "react", "vue"]);
    assert_eq!(
        config.packages[1],
        PackageConfig::new("react", "packages/react/CHANGELOG.md").with_flavor("React")
    );
    assert_eq!(
        config.extraction.min_content_length,
        DEFAULT_MIN_CONTENT_LENGTH
    );
    assert_eq!(config.output.prompt, None);
    assert_eq!(config.output.packages_info, None);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[[packages]]
name = "solid"
changelog = "packages/solid/CHANGELOG.md"
flavor = "Solid"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.packages.len(), 1);
    assert_eq!(config.packages[0].name, "solid");
    assert_eq!(config.packages[0].flavor.as_deref(), Some("Solid"));
    assert_eq!(
        config.extraction.min_content_length,
        DEFAULT_MIN_CONTENT_LENGTH
    );
}

#[test]
#[serial]
fn test_load_fixture_with_output() {
    let config = load_config(Some("tests/fixtures/config_with_output.toml"))
        .expect("Failed to load test config");
    assert_eq!(config.packages.len(), 2);
    assert_eq!(config.packages[1].flavor, None);
    assert_eq!(config.extraction.min_content_length, 12);
    assert_eq!(config.output.prompt, Some(PathBuf::from("out/prompt.md")));
    assert_eq!(
        config.output.packages_info,
        Some(PathBuf::from("out/packages-info.json"))
    );
}

#[test]
#[serial]
fn test_missing_explicit_config_is_error() {
    let result = load_config(Some("tests/fixtures/does-not-exist.toml"));
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_load_from_current_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("docsync.toml"),
        "[extraction]\nmin_content_length = 99\n",
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(result.unwrap().extraction.min_content_length, 99);
}
