//! Integration tests for snip-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> merge.

// Integration tests live outside cfg(test)
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use snip_config::{CONFIG_FILENAME, ColorMode, Config, ConfigError, ConfigWarning};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    /// Owned temporary directory.
    root: tempfile::TempDir,
}

impl TestEnv {
    /// Creates an empty environment.
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Root path of the environment.
    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Writes a `.snip.toml` into `rel_dir` and returns its path.
    fn create_config(&self, rel_dir: &str, content: &str) -> PathBuf {
        let path = self.create_dir(rel_dir).join(CONFIG_FILENAME);
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn root_config_isolates_from_host() {
    let env = TestEnv::new();
    env.create_config("", "root = true\n");
    let config = Config::load(env.path()).unwrap();

    assert_eq!(config.output.color, ColorMode::Auto);
    assert_eq!(config.sources.len(), 1);
}

#[test]
fn nested_configs_merge_closest_first() {
    let env = TestEnv::new();
    env.create_config("", "root = true\n[output]\ncolor = \"always\"\n");
    env.create_config("project", "[output]\ncolor = \"never\"\n");
    let cwd = env.create_dir("project/src");

    let config = Config::load(&cwd).unwrap();
    assert_eq!(config.output.color, ColorMode::Never);
    assert_eq!(config.sources.len(), 2);
    assert_eq!(config.config_root, Some(env.path().join("project")));
}

#[test]
fn invalid_config_reports_path() {
    let env = TestEnv::new();
    let path = env.create_config("", "root = true\n[window\n");

    let err = Config::load(env.path()).unwrap_err();
    match err {
        ConfigError::ParseToml { path: bad, .. } => assert_eq!(bad, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn load_from_missing_file_fails() {
    let env = TestEnv::new();
    let missing = env.path().join("nope.toml");
    let err = Config::load_from_files(&[missing]).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn load_from_no_files_is_default() {
    let config = Config::load_from_files(&[]).unwrap();
    assert!(config.sources.is_empty());
    assert!(config.validate().is_empty());
}

#[test]
fn policy_overrides_are_ignored_and_reported() {
    let env = TestEnv::new();
    let path = env.create_config(
        "",
        "root = true\n[markers]\nopen = \"<b>\"\nclose = \"</b>\"\n[window]\ncontext_before = 5\n",
    );
    let config = Config::load(env.path()).unwrap();

    assert_eq!(
        config.validate(),
        vec![
            ConfigWarning::FixedSetting {
                file: path.clone(),
                key: "markers".to_string(),
            },
            ConfigWarning::FixedSetting {
                file: path,
                key: "window".to_string(),
            },
        ]
    );
    assert!(!config.settings_to_toml().unwrap().contains("markers"));
}
