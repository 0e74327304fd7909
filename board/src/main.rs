use std::process::ExitCode;

use clap::Parser;
use comment_board::{cli::Cli, logging, output::Output};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_tracing_subscriber()?;

    let cli = Cli::parse();
    let report = comment_board::execute(cli).await?;
    Output::new().write(&report.lines)?;

    Ok(if report.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter = logging::env_log_filter()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}
