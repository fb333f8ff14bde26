//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod serve;

/// Curtain - live click progress and a one-time curtain reveal
#[derive(Parser)]
#[command(name = "curtain")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the relay server
    Serve(serve::ServeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "curtain",
            "serve",
            "--port",
            "4000",
            "--host",
            "127.0.0.1",
            "--public-dir",
            "site",
        ])
        .unwrap();
        let Commands::Serve(args) = cli.command;
        assert_eq!(args.port, 4000);
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.public_dir, std::path::PathBuf::from("site"));
        assert!(args.log_file.is_none());
    }

    #[test]
    fn test_host_ignores_environment() {
        std::env::set_var("HOST", "buildbox.example.internal");
        let cli = Cli::try_parse_from(["curtain", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command;
        assert_eq!(args.host, curtain_web::config::DEFAULT_HOST);
    }
}
