//! Configuration loading and discovery for `pxscale.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::PxscaleConfig;
use crate::algorithms::Algorithm;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for during discovery.
pub const CONFIG_FILE_NAME: &str = "pxscale.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse pxscale.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override the algorithm
    pub algorithm: Option<Algorithm>,
    /// Override the output path
    pub output: Option<PathBuf>,
    /// Override the number of worker threads
    pub jobs: Option<usize>,
    /// Override the log level
    pub log_level: Option<String>,
}

/// Per-user config location: `$XDG_CONFIG_HOME/pxscale/pxscale.toml`, or
/// `~/.config/pxscale/pxscale.toml` when that variable is unset or empty.
pub fn user_config_path() -> Option<PathBuf> {
    let base = env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("pxscale").join(CONFIG_FILE_NAME))
}

/// Where a run started in `dir` looks for its config, nearest first: `dir`
/// and each of its ancestors, then [`user_config_path`].
pub fn config_candidates(dir: &Path) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = dir.ancestors().map(|d| d.join(CONFIG_FILE_NAME)).collect();
    candidates.extend(user_config_path());
    candidates
}

/// The first of [`config_candidates`] for `dir` that exists.
pub fn discover_config_from(dir: &Path) -> Option<PathBuf> {
    config_candidates(dir).into_iter().find(|candidate| candidate.is_file())
}

/// The config file for a run in the working directory. Without a readable
/// working directory only the per-user file is considered.
pub fn discover_config() -> Option<PathBuf> {
    match env::current_dir() {
        Ok(cwd) => discover_config_from(&cwd),
        Err(_) => user_config_path().filter(|p| p.is_file()),
    }
}

/// Load the scaler configuration.
///
/// An explicit `path` must exist. Without one, [`discover_config`] picks the
/// file, and a run with no config anywhere gets [`PxscaleConfig::default`].
pub fn load_config(path: Option<&Path>) -> Result<PxscaleConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => discover_config(),
    };

    match config_path {
        Some(p) => {
            tracing::debug!(path = %p.display(), "loading config");
            load_config_file(&p)
        }
        None => Ok(PxscaleConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<PxscaleConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PxscaleConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(config: &mut PxscaleConfig, overrides: &CliOverrides) {
    if let Some(algorithm) = overrides.algorithm {
        config.scale.algorithm = Some(algorithm.name().to_string());
    }

    if let Some(ref output) = overrides.output {
        config.scale.output = output.clone();
    }

    if let Some(jobs) = overrides.jobs {
        config.scale.jobs = Some(jobs);
    }

    if let Some(ref level) = overrides.log_level {
        config.log.level = level.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &[u8]) -> PathBuf {
        let config_path = dir.join(CONFIG_FILE_NAME);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(contents)
            .expect("should write config content");
        config_path
    }

    /// Run `f` with `XDG_CONFIG_HOME` and `HOME` set as given, restoring both.
    fn with_env<T>(xdg: Option<&Path>, home: Option<&Path>, f: impl FnOnce() -> T) -> T {
        let saved: Vec<_> = ["XDG_CONFIG_HOME", "HOME"].iter().map(|k| (*k, env::var_os(k))).collect();
        for (key, value) in [("XDG_CONFIG_HOME", xdg), ("HOME", home)] {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
        let result = f();
        for (key, value) in saved {
            match value {
                Some(v) => env::set_var(key, v),
                None => env::remove_var(key),
            }
        }
        result
    }

    #[test]
    fn test_discover_in_start_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"[scale]\nalgorithm = \"hq2xA\"");

        assert_eq!(discover_config_from(temp.path()), Some(config_path));
    }

    #[test]
    fn test_discover_in_ancestor_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"");

        let subdir = temp.path().join("art").join("tiles");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        assert_eq!(discover_config_from(&subdir), Some(config_path));
    }

    #[test]
    fn test_nearest_config_wins() {
        let temp = TempDir::new().expect("should create temp dir");
        write_config(temp.path(), b"");
        let sprites = temp.path().join("sprites");
        fs::create_dir_all(&sprites).expect("should create subdirectory");
        let nearest = write_config(&sprites, b"[scale]\nalgorithm = \"block3\"");

        assert_eq!(discover_config_from(&sprites), Some(nearest));
    }

    #[test]
    fn test_directory_named_like_config_is_skipped() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"");
        let inner = temp.path().join("inner");
        fs::create_dir_all(inner.join(CONFIG_FILE_NAME)).expect("should create decoy directory");

        assert_eq!(discover_config_from(&inner), Some(config_path));
    }

    #[test]
    #[serial]
    fn test_discover_nothing() {
        let temp = TempDir::new().expect("should create temp dir");
        let empty_home = TempDir::new().expect("should create temp dir");
        let found = with_env(Some(empty_home.path()), None, || discover_config_from(temp.path()));
        assert_eq!(found, None);
    }

    #[test]
    #[serial]
    fn test_user_config_is_last_candidate() {
        let temp = TempDir::new().expect("should create temp dir");
        let xdg = TempDir::new().expect("should create temp dir");
        let candidates = with_env(Some(xdg.path()), None, || config_candidates(temp.path()));

        assert_eq!(candidates.first(), Some(&temp.path().join(CONFIG_FILE_NAME)));
        assert_eq!(candidates.last(), Some(&xdg.path().join("pxscale").join(CONFIG_FILE_NAME)));
    }

    #[test]
    #[serial]
    fn test_discover_user_config() {
        let temp = TempDir::new().expect("should create temp dir");
        let xdg = TempDir::new().expect("should create temp dir");
        let dir = xdg.path().join("pxscale");
        fs::create_dir_all(&dir).expect("should create config dir");
        let config_path = write_config(&dir, b"");

        let found = with_env(Some(xdg.path()), None, || discover_config_from(temp.path()));
        assert_eq!(found, Some(config_path));
    }

    #[test]
    #[serial]
    fn test_empty_xdg_falls_back_to_home() {
        let home = TempDir::new().expect("should create temp dir");
        let path = with_env(Some(Path::new("")), Some(home.path()), user_config_path);
        assert_eq!(path, Some(home.path().join(".config").join("pxscale").join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(
            temp.path(),
            br#"
[scale]
algorithm = "superXBR"
output = "scaled.bmp"
jobs = 2

[log]
level = "info"
"#,
        );

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.algorithm(), Algorithm::SuperXbr);
        assert_eq!(config.scale.output, PathBuf::from("scaled.bmp"));
        assert_eq!(config.scale.jobs, Some(2));
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_load_config_missing_file_is_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let result = load_config(Some(&temp.path().join("nonexistent.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"this is not valid toml {{{");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"[scale]\nalgorithm = \"nearest\"\njobs = 0\n");

        match load_config(Some(&config_path)) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors[0].contains("scale.algorithm"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_cli_overrides() {
        let mut config = PxscaleConfig::default();
        let overrides = CliOverrides {
            algorithm: Some(Algorithm::Hq2xB),
            output: Some(PathBuf::from("dist/out.bmp")),
            jobs: Some(8),
            log_level: Some("trace".to_string()),
        };
        merge_cli_overrides(&mut config, &overrides);

        assert_eq!(config.scale.algorithm.as_deref(), Some("hq2xB"));
        assert_eq!(config.scale.output, PathBuf::from("dist/out.bmp"));
        assert_eq!(config.scale.jobs, Some(8));
        assert_eq!(config.log.level, "trace");
    }

    #[test]
    fn test_merge_cli_overrides_empty_keeps_config() {
        let mut config = PxscaleConfig::default();
        config.scale.jobs = Some(3);
        merge_cli_overrides(&mut config, &CliOverrides::default());
        assert_eq!(config.scale.jobs, Some(3));
        assert_eq!(config.scale.algorithm, None);
        assert_eq!(config.algorithm(), Algorithm::Scale2x);
    }
}
