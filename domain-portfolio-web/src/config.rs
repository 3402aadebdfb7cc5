//! Server configuration loaded from `config.toml`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "DOMAIN_PORTFOLIO_CONFIG";
/// Environment variable holding the admin password
pub const ADMIN_PASSWORD_ENV: &str = "ADMIN_PASSWORD";

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Defaults to the number of CPUs
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: None,
        }
    }
}

impl ServerConfig {
    pub fn worker_count(&self) -> usize {
        self.workers.filter(|&n| n > 0).unwrap_or_else(num_cpus::get)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/portfolio.json"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Adds `Secure` to the session cookie
    pub secure_cookie: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub level: String,
    pub json: bool,
    /// Daily-rolling log files are written here when set
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            dir: None,
        }
    }
}

impl Config {
    /// Load from `$DOMAIN_PORTFOLIO_CONFIG` or `./config.toml`.
    ///
    /// A missing default file yields the built-in defaults; an explicitly
    /// configured path must exist.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Admin password from the environment; empty counts as unset
    pub fn admin_password() -> Option<String> {
        std::env::var(ADMIN_PASSWORD_ENV)
            .ok()
            .filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.log.level, "info");
        assert!(!config.auth.secure_cookie);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::parse(
            r#"
            [server]
            port = 9000
            workers = 2

            [log]
            json = true
            dir = "/var/log/portfolio"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.worker_count(), 2);
        assert!(config.log.json);
        assert_eq!(config.log.dir, Some(PathBuf::from("/var/log/portfolio")));
        assert_eq!(config.storage.data_file, PathBuf::from("data/portfolio.json"));
    }

    #[test]
    fn zero_workers_falls_back_to_cpu_count() {
        let server = ServerConfig {
            workers: Some(0),
            ..Default::default()
        };
        assert!(server.worker_count() >= 1);
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(Config::parse("[server]\nport = \"eighty\"").is_err());
    }

    #[test]
    fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[auth]\nsecure_cookie = true\n").unwrap();
        assert!(Config::from_file(&path).unwrap().auth.secure_cookie);
        assert!(Config::from_file(&dir.path().join("missing.toml")).is_err());
    }
}
