//! Carousel CLI - drive the recommendation carousel from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Load and print the carousel
//! carousel show
//!
//! # Slide forward three times, then back once
//! carousel show --steps 3 --back 1
//!
//! # Print the render state as JSON
//! carousel show --json
//!
//! # Toggle a product's favorite flag
//! carousel favorite 12
//!
//! # Drop the cached product list (favorites are kept)
//! carousel clear-cache
//! ```
//!
//! Configuration comes from `CAROUSEL_*` environment variables or a `.env`
//! file. Log verbosity follows `RUST_LOG`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(author, version, about = "Product recommendation carousel")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the carousel and print it
    Show {
        /// Slide forward this many times after loading
        #[arg(short, long, default_value_t = 0)]
        steps: u32,

        /// Slide back this many times after moving forward
        #[arg(short, long, default_value_t = 0)]
        back: u32,

        /// Viewport width in pixels (overrides `CAROUSEL_VIEWPORT_WIDTH`)
        #[arg(short, long)]
        width: Option<u32>,

        /// Print the render state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Toggle a product's favorite flag
    Favorite {
        /// Product id; digits are read as a numeric id
        id: String,
    },
    /// Remove the cached product list
    ClearCache,
}

#[tokio::main]
async fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "carousel=info,carousel_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Show {
            steps,
            back,
            width,
            json,
        } => {
            commands::show::run(commands::show::ShowOptions {
                steps,
                back,
                width,
                json,
            })
            .await?;
        }
        Commands::Favorite { id } => commands::favorite::run(&id).await?,
        Commands::ClearCache => commands::cache::clear()?,
    }
    Ok(())
}
