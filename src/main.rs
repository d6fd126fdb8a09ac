use anyhow::Context;
use clap::Parser;
use std::io;
use triarea::{logger, CliConfig, Session};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config.session_settings());

    let report = session.run().context("triangle session aborted")?;
    tracing::info!(
        first_area = report.first.area(),
        second_area = report.second.area(),
        "done"
    );

    if !config.no_pause {
        session.wait_for_exit()?;
    }

    Ok(())
}
