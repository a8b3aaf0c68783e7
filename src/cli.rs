//! Command-line interface for proxyctl.
//!
//! The console itself is interactive; flags only shape where it reads its
//! configuration and where generated files land.

use std::path::PathBuf;

use clap::Parser;

/// proxyctl — manage an nginx host from an interactive menu.
#[derive(Debug, Parser)]
#[command(name = "proxyctl", version, after_long_help = CONFIG_HELP)]
pub struct Cli {
    /// Config file to use instead of `$PROXYCTL_CONFIG` or `~/.proxyctl/config.toml`.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where docker-compose and CI files are written.
    /// Overrides `paths.working-dir` from the config.
    #[arg(long)]
    pub working_dir: Option<PathBuf>,

    /// Skip the startup banner.
    #[arg(long)]
    pub no_banner: bool,

    /// Log every command before it runs.
    #[arg(short, long)]
    pub verbose: bool,
}

const CONFIG_HELP: &str = r#"Configuration (all keys optional):
  privilege = "sudo"        # "" when running as root
  service = "nginx"

  [paths]
  nginx-conf = "/etc/nginx/nginx.conf"
  conf-d = "/etc/nginx/conf.d"
  working-dir = "."

Logging:
  RUST_LOG=proxyctl=debug proxyctl"#;
