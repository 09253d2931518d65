use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::config::Config;

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Default config location: `<config_dir>/tasklist/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("tasklist");
    path.push("config.toml");
    Some(path)
}

/// Load the config.
///
/// An explicit path must exist. Without one, the default location is tried
/// and a missing file there yields the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match explicit {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(path) if path.exists() => read_config(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Config::default())
            }
        },
    }
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), "config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r##"[ui]
show_key_hints = true

[log]
level = "debug"
"##,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(config.ui.show_key_hints);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.toml");
        fs::write(&path, "[ui\nshow_key_hints = ").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().starts_with("could not parse"));
    }

    #[test]
    fn test_default_path_is_namespaced() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("tasklist/config.toml"));
        }
    }
}
