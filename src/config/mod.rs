mod file_config;

pub use file_config::FileConfig;

use anyhow::{bail, Result};
use std::path::PathBuf;

pub const DEFAULT_PROVIDER_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SEC: u64 = 10;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub state_dir: Option<PathBuf>,
    pub provider_url: Option<String>,
    pub request_timeout_sec: u64,
    pub toast_duration_sec: i64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub state_dir: PathBuf,
    pub provider_url: String,
    pub request_timeout_sec: u64,
    pub toast_duration_sec: i64,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let state_dir = file
            .state_dir
            .map(PathBuf::from)
            .or_else(|| cli.state_dir.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("state_dir must be specified via --state-dir or in config file")
            })?;

        if !state_dir.exists() {
            bail!("State directory does not exist: {:?}", state_dir);
        }
        if !state_dir.is_dir() {
            bail!("state_dir is not a directory: {:?}", state_dir);
        }

        let provider_url = file
            .provider_url
            .or_else(|| cli.provider_url.clone())
            .unwrap_or_else(|| DEFAULT_PROVIDER_URL.to_string());

        let request_timeout_sec = file.request_timeout_sec.unwrap_or(cli.request_timeout_sec);
        if request_timeout_sec == 0 {
            bail!("request_timeout_sec must be greater than zero");
        }

        let toast_duration_sec = file.toast_duration_sec.unwrap_or(cli.toast_duration_sec);
        if toast_duration_sec <= 0 {
            bail!("toast_duration_sec must be greater than zero");
        }

        Ok(Self {
            state_dir,
            provider_url,
            request_timeout_sec,
            toast_duration_sec,
        })
    }

    pub fn credential_db_path(&self) -> PathBuf {
        self.state_dir.join("credentials.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::DEFAULT_TOAST_DURATION_SECS;
    use tempfile::TempDir;

    fn make_temp_state_dir() -> TempDir {
        TempDir::new().unwrap()
    }

    fn cli_with_dir(dir: &TempDir) -> CliConfig {
        CliConfig {
            state_dir: Some(dir.path().to_path_buf()),
            provider_url: None,
            request_timeout_sec: DEFAULT_REQUEST_TIMEOUT_SEC,
            toast_duration_sec: DEFAULT_TOAST_DURATION_SECS,
        }
    }

    #[test]
    fn test_resolve_cli_only() {
        let temp_dir = make_temp_state_dir();
        let cli = CliConfig {
            state_dir: Some(temp_dir.path().to_path_buf()),
            provider_url: Some("http://identity:9000".to_string()),
            request_timeout_sec: 30,
            toast_duration_sec: 6,
        };

        let config = AppConfig::resolve(&cli, None).unwrap();

        assert_eq!(config.state_dir, temp_dir.path());
        assert_eq!(config.provider_url, "http://identity:9000");
        assert_eq!(config.request_timeout_sec, 30);
        assert_eq!(config.toast_duration_sec, 6);
    }

    #[test]
    fn test_resolve_toml_overrides_cli() {
        let temp_dir = make_temp_state_dir();
        let mut cli = cli_with_dir(&temp_dir);
        cli.provider_url = Some("http://cli:1".to_string());

        let file_config = FileConfig {
            provider_url: Some("http://toml:2".to_string()),
            request_timeout_sec: Some(25),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli, Some(file_config)).unwrap();

        assert_eq!(config.provider_url, "http://toml:2");
        assert_eq!(config.request_timeout_sec, 25);
        // CLI value used when TOML doesn't specify
        assert_eq!(config.toast_duration_sec, DEFAULT_TOAST_DURATION_SECS);
    }

    #[test]
    fn test_resolve_provider_url_defaults() {
        let temp_dir = make_temp_state_dir();
        let config = AppConfig::resolve(&cli_with_dir(&temp_dir), None).unwrap();
        assert_eq!(config.provider_url, DEFAULT_PROVIDER_URL);
    }

    #[test]
    fn test_resolve_missing_state_dir_error() {
        let cli = CliConfig {
            request_timeout_sec: DEFAULT_REQUEST_TIMEOUT_SEC,
            toast_duration_sec: DEFAULT_TOAST_DURATION_SECS,
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("state_dir must be specified"));
    }

    #[test]
    fn test_resolve_nonexistent_state_dir_error() {
        let cli = CliConfig {
            state_dir: Some(PathBuf::from("/nonexistent/path/that/should/not/exist")),
            request_timeout_sec: DEFAULT_REQUEST_TIMEOUT_SEC,
            toast_duration_sec: DEFAULT_TOAST_DURATION_SECS,
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_resolve_state_dir_not_directory_error() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let cli = CliConfig {
            state_dir: Some(temp_file.path().to_path_buf()),
            request_timeout_sec: DEFAULT_REQUEST_TIMEOUT_SEC,
            toast_duration_sec: DEFAULT_TOAST_DURATION_SECS,
            ..Default::default()
        };
        let result = AppConfig::resolve(&cli, None);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a directory"));
    }

    #[test]
    fn test_resolve_zero_timeout_error() {
        let temp_dir = make_temp_state_dir();
        let mut cli = cli_with_dir(&temp_dir);
        cli.request_timeout_sec = 0;
        assert!(AppConfig::resolve(&cli, None).is_err());
    }

    #[test]
    fn test_credential_db_path() {
        let temp_dir = make_temp_state_dir();
        let config = AppConfig::resolve(&cli_with_dir(&temp_dir), None).unwrap();
        assert_eq!(
            config.credential_db_path(),
            temp_dir.path().join("credentials.db")
        );
    }
}
