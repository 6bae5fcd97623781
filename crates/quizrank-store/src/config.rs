//! Application configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::file::JsonFileStore;

/// Top-level quizrank configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizrankConfig {
    /// Directory holding the persisted collection files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./quizrank-data")
}

impl Default for QuizrankConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl QuizrankConfig {
    /// The file-backed gateway for the configured data directory.
    pub fn store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.data_dir)
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizrank.toml` in the current directory
/// 2. `~/.config/quizrank/config.toml`
///
/// Falls back to defaults when neither exists.
pub fn load_config() -> Result<QuizrankConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizrankConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizrank.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = config_home() {
            let global = home.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(QuizrankConfig::default())
        }
    }
}

fn config_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config").join("quizrank"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_for_empty_config() {
        let config: QuizrankConfig = toml::from_str("").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("./quizrank-data"));
    }

    #[test]
    fn explicit_path_is_parsed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data_dir = \"/var/lib/quizrank\"").unwrap();
        let config = load_config_from(Some(file.path())).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/quizrank"));
    }

    #[test]
    fn missing_explicit_path_errors() {
        let err = load_config_from(Some(Path::new("/nonexistent/quizrank.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn store_points_at_the_data_dir() {
        let config = QuizrankConfig {
            data_dir: PathBuf::from("/tmp/qr"),
        };
        assert_eq!(config.store().dir(), Path::new("/tmp/qr"));
    }
}
