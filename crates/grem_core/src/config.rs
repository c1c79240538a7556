//! Application configuration values.
//!
//! Passed explicitly into bootstrap and the front end; nothing here is read
//! from the environment.

use std::path::{Path, PathBuf};

const DEFAULT_APP_DIR_NAME: &str = ".grem";
const DEFAULT_DB_FILE_NAME: &str = "grem.db";
const DEFAULT_LOG_DIR_NAME: &str = "logs";
const DEFAULT_DUE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory created under the user's home.
    pub app_dir_name: String,
    /// Database file name inside the application directory.
    pub db_file_name: String,
    /// Log directory name inside the application directory.
    pub log_dir_name: String,
    /// `chrono` format string used to parse and print due dates.
    pub due_date_format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_dir_name: DEFAULT_APP_DIR_NAME.to_string(),
            db_file_name: DEFAULT_DB_FILE_NAME.to_string(),
            log_dir_name: DEFAULT_LOG_DIR_NAME.to_string(),
            due_date_format: DEFAULT_DUE_DATE_FORMAT.to_string(),
        }
    }
}

impl AppConfig {
    /// Application directory under `home`.
    pub fn app_dir_in(&self, home: &Path) -> PathBuf {
        home.join(&self.app_dir_name)
    }

    pub fn db_path(&self, app_dir: &Path) -> PathBuf {
        app_dir.join(&self.db_file_name)
    }

    pub fn log_dir(&self, app_dir: &Path) -> PathBuf {
        app_dir.join(&self.log_dir_name)
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use std::path::Path;

    #[test]
    fn default_paths_nest_under_app_dir() {
        let config = AppConfig::default();
        let app_dir = config.app_dir_in(Path::new("/home/someone"));

        assert_eq!(app_dir, Path::new("/home/someone/.grem"));
        assert_eq!(config.db_path(&app_dir), Path::new("/home/someone/.grem/grem.db"));
        assert_eq!(config.log_dir(&app_dir), Path::new("/home/someone/.grem/logs"));
        assert_eq!(config.due_date_format, "%Y-%m-%d");
    }
}
