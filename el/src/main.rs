use std::io;

use clap::Parser;
use eyre::{Context, Result};
use log::{debug, error, info};

use eventlistener::cli::Cli;
use eventlistener::config::Config;
use eventlistener::listener::Listener;

fn setup_logging(verbose: bool) -> Result<()> {
    // stdout belongs to the supervisor protocol; env_logger writes to stderr
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .context("Failed to initialize logger")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    if !cli.args.is_empty() {
        debug!("Ignoring extra arguments: {:?}", cli.args);
    }

    let config = Config::load(cli.config.as_ref())
        .context("Failed to load configuration")?
        .with_audit_log(cli.audit_log);

    info!(
        "eventlistener starting: audit_log={} announce={:?}",
        config.audit_log.display(),
        config.announce
    );

    let stdin = io::stdin().lock();
    let mut listener = Listener::new(stdin, io::stdout(), io::stderr(), config.listener_config());

    match listener.run() {
        Ok(count) => {
            info!("eventlistener exiting after {} events", count);
            Ok(())
        }
        Err(e) => {
            error!("Handshake cycle failed: {}", e);
            Err(e).context("Event listener stopped")
        }
    }
}
