//! custom1 CLI
//!
//! Validates a site configuration and serves the built theme bundle.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for custom1.
#[derive(Parser)]
#[command(
    name = "custom1",
    version,
    about = "Tooling for sites built with the custom1 blog theme"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Validate configuration and content
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
        /// Exported content document to validate
        #[arg(long)]
        content: Option<PathBuf>,
    },
    /// Serve a built frontend directory
    Serve {
        /// Directory holding index.html and the wasm bundle
        #[arg(short, long, default_value = "dist")]
        dir: PathBuf,
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    custom1::init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { strict, content } => {
            custom1::cmd::check::run(&cli.config, content.as_deref(), strict)?;
        }
        Commands::Serve { dir, port } => {
            custom1::cmd::serve::run(&dir, port).await?;
        }
    }

    Ok(())
}
