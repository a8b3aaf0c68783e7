mod cli;
mod collect;
mod config;
mod exec;
mod handlers;
mod host;
mod model;
mod prompt;
mod report;
mod session;
mod template;
#[cfg(test)]
mod testing;

use std::{io, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::Config;
use exec::ShellExecutor;
use prompt::TerminalPrompter;
use session::Session;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("{e}");
            process::exit(1);
        }
    };

    if let Some(dir) = cli.working_dir {
        config.paths.working_dir = dir;
    }

    if !cli.no_banner {
        report::banner();
    }

    let mut executor = ShellExecutor;
    let mut prompter = TerminalPrompter::default();

    if let Err(e) = Session::new(&config, &mut executor, &mut prompter).run() {
        tracing::error!("{e}");
        process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "proxyctl=debug"
    } else {
        "proxyctl=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
