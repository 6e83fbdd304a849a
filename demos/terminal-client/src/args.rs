use clap::Parser;
use tilewire::{ClientConfig, DEFAULT_ENDPOINT};

#[derive(Parser, Debug, Clone)]
#[command(name = "tilewire-term", version, about = "Play one seat of a Tilewire table from the terminal", long_about = None)]
pub struct Cli {
    /// WebSocket URL of the game server
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Name to log in with
    #[arg(short, long)]
    pub nickname: String,

    /// Print each table as JSON instead of text
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Show debug logs (overridden by RUST_LOG)
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl Cli {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint.clone(),
            nickname: self.nickname.clone(),
        }
    }
}
