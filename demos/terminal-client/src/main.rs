mod args;
mod input;
mod printer;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use input::Command;
use printer::TerminalPresenter;
use tilewire::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.debug {
        "debug"
    } else {
        "tilewire=info,warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(cli.debug)
        .with_writer(std::io::stderr)
        .init();

    let (clicks, intents) = mpsc::channel(16);
    tokio::spawn(read_keyboard(clicks));

    println!("{}", input::HELP);
    let mut client = TileClient::builder()
        .config(cli.client_config())
        .build(TerminalPresenter::new(cli.json));

    client
        .run(intents)
        .await
        .with_context(|| format!("playing at {}", cli.endpoint))?;

    Ok(())
}

/// Forwards keyboard commands as intents until `quit` or end of input.
async fn read_keyboard(clicks: mpsc::Sender<Intent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stdin");
                break;
            }
        };
        match input::parse(&line) {
            None => {}
            Some(Ok(Command::Intent(intent))) => {
                if clicks.send(intent).await.is_err() {
                    break;
                }
            }
            Some(Ok(Command::Quit)) => break,
            Some(Ok(Command::Help)) => println!("{}", input::HELP),
            Some(Err(msg)) => eprintln!("{msg}"),
        }
    }
    tracing::debug!("keyboard closed");
}
