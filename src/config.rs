//! proxyctl configuration.
//!
//! Resolved through a chain:
//!
//! 1. `--config <path>`: explicit per-run override
//! 2. `PROXYCTL_CONFIG` env var: path to a config file
//! 3. `~/.proxyctl/config.toml`: defaults are used if it doesn't exist
//!
//! Every key is optional. A file only needs the values that differ from a
//! stock Debian nginx install:
//!
//! ```toml
//! privilege = "sudo"
//! service = "nginx"
//!
//! [paths]
//! nginx-conf = "/etc/nginx/nginx.conf"
//! conf-d = "/etc/nginx/conf.d"
//! working-dir = "."
//! ```

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;

/// Env var naming a config file.
pub const CONFIG_ENV: &str = "PROXYCTL_CONFIG";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no config file found at {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// proxyctl configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Prefix for privileged commands. Empty when already running as root.
    pub privilege: String,

    /// The systemd unit managed by start, stop, status and reload.
    pub service: String,

    pub paths: Paths,
}

/// Where generated files go.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Paths {
    /// The main nginx config, replaced by the tuning rule.
    pub nginx_conf: PathBuf,

    /// nginx's additional-config directory.
    pub conf_d: PathBuf,

    /// Where docker-compose and CI descriptors are written.
    pub working_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            privilege: "sudo".to_string(),
            service: "nginx".to_string(),
            paths: Paths::default(),
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            nginx_conf: PathBuf::from("/etc/nginx/nginx.conf"),
            conf_d: PathBuf::from("/etc/nginx/conf.d"),
            working_dir: PathBuf::from("."),
        }
    }
}

impl Paths {
    pub fn load_balancer(&self) -> PathBuf {
        self.conf_d.join("load_balancer.conf")
    }

    pub fn compose_file(&self) -> PathBuf {
        self.working_dir.join("docker-compose.yml")
    }

    pub fn pipeline_file(&self) -> PathBuf {
        self.working_dir.join(".gitlab-ci.yml")
    }
}

impl Config {
    /// Resolve and load configuration.
    ///
    /// An explicit path (flag or env var) must exist. The default path may be
    /// missing, in which case defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        // 1. --config flag.
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        // 2. PROXYCTL_CONFIG environment variable.
        if let Ok(path) = env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Self::from_file(Path::new(&path));
        }

        // 3. ~/.proxyctl/config.toml.
        let Some(path) = Self::default_path() else {
            return Ok(Self::default());
        };

        match fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&path, &contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    /// Load a config file that must exist.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        Self::parse(path, &contents)
    }

    /// The default config file path: `~/.proxyctl/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".proxyctl").join("config.toml"))
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
