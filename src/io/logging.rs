use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::model::config::LogConfig;

const LOG_LEVEL_ENV: &str = "TASKLIST_LOG_LEVEL";
const DEFAULT_LEVEL: &str = "warn";

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// A timestamped file in the log directory (the TUI owns the terminal)
    File,
    /// stderr (script mode)
    Stderr,
}

/// Keeps the non-blocking writer alive; drop it to flush on exit.
pub struct LogGuard {
    _guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Install the global subscriber.
///
/// Level precedence: `cli_level`, then `TASKLIST_LOG_LEVEL`, then the config.
pub fn init_logging(
    config: &LogConfig,
    cli_level: Option<&str>,
    target: LogTarget,
) -> Result<LogGuard, Box<dyn std::error::Error>> {
    let env_level = std::env::var(LOG_LEVEL_ENV).ok();
    let level = resolve_level(cli_level, env_level.as_deref(), &config.level);
    let filter = EnvFilter::new(format!("{level},tasklist={level}"));

    match target {
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()?;
            Ok(LogGuard { _guard: None })
        }
        LogTarget::File => {
            let log_dir = match &config.dir {
                Some(dir) => dir.clone(),
                None => default_log_directory()?,
            };
            fs::create_dir_all(&log_dir)?;
            let path = log_file_path(&log_dir);
            let file = fs::File::create(&path)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file);

            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()?;

            tracing::info!("logging to {}", path.display());
            Ok(LogGuard {
                _guard: Some(guard),
            })
        }
    }
}

fn resolve_level(cli: Option<&str>, env: Option<&str>, config: &str) -> &'static str {
    cli.and_then(normalize_log_level)
        .or_else(|| env.and_then(normalize_log_level))
        .or_else(|| normalize_log_level(config))
        .unwrap_or(DEFAULT_LEVEL)
}

fn normalize_log_level(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" => Some("error"),
        "off" => Some("off"),
        _ => None,
    }
}

pub fn default_log_directory() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let data_dir = dirs::data_local_dir().ok_or("could not determine local data directory")?;
    Ok(data_dir.join("tasklist").join("logs"))
}

fn log_file_path(log_dir: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    log_dir.join(format!("tasklist-{}.log", timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_log_level() {
        assert_eq!(normalize_log_level("DEBUG"), Some("debug"));
        assert_eq!(normalize_log_level(" warning "), Some("warn"));
        assert_eq!(normalize_log_level("loud"), None);
    }

    #[test]
    fn test_resolve_level_precedence() {
        assert_eq!(resolve_level(Some("trace"), Some("info"), "error"), "trace");
        assert_eq!(resolve_level(None, Some("info"), "error"), "info");
        assert_eq!(resolve_level(Some("bogus"), None, "error"), "error");
        assert_eq!(resolve_level(None, Some("bogus"), "bogus"), "warn");
    }

    #[test]
    fn test_log_file_path() {
        let path = log_file_path(Path::new("/tmp/tl-logs"));
        let name = path.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with("tasklist-"));
        assert!(name.ends_with(".log"));
    }

    // The only test that installs the global subscriber.
    #[test]
    fn test_file_target_announces_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            level: "warn".into(),
            dir: Some(dir.path().join("logs")),
        };
        let guard = init_logging(&config, Some("info"), LogTarget::File).unwrap();
        drop(guard);

        let entries: Vec<_> = fs::read_dir(dir.path().join("logs"))
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(entries.len(), 1);
        let contents = fs::read_to_string(&entries[0]).unwrap();
        assert!(contents.contains(&format!("logging to {}", entries[0].display())));
    }
}
