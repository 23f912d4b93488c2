use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "wordflow";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// Settings and custom lists. Falls back to the working directory.
    pub fn config_dir() -> PathBuf {
        ProjectDirs::from("", "", APP_NAME)
            .map(|pd| pd.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Session history and logs, under `$HOME/.local/state/wordflow` when HOME is set.
    pub fn state_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            Some(PathBuf::from(home).join(".local").join("state").join(APP_NAME))
        } else {
            ProjectDirs::from("", "", APP_NAME).map(|pd| pd.data_local_dir().to_path_buf())
        }
    }

    pub fn db_path() -> Option<PathBuf> {
        Self::state_dir().map(|dir| dir.join("history.db"))
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::state_dir().map(|dir| dir.join("wordflow.log"))
    }
}
