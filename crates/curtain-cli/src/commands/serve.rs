//! Relay server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use curtain_web::{config, ServerConfig};
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = config::DEFAULT_PORT)]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = config::DEFAULT_HOST)]
    pub host: String,

    /// Directory of static pages to serve
    #[arg(long, env = "CURTAIN_PUBLIC_DIR", default_value = config::DEFAULT_PUBLIC_DIR)]
    pub public_dir: PathBuf,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        host: args.host,
        port: args.port,
        public_dir: args.public_dir,
    };

    let host = config.display_host();

    println!();
    println!("  {} {}", "Curtain".cyan().bold(), "Relay".bold());
    println!();
    println!(
        "  {}      http://{}:{}",
        "Pages".green(),
        host,
        config.port
    );
    println!(
        "  {}   http://{}:{}/api/progress",
        "Progress".green(),
        host,
        config.port
    );
    println!(
        "  {}  ws://{}:{}/ws",
        "WebSocket".green(),
        host,
        config.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    curtain_web::run_server(config).await?;

    Ok(())
}
