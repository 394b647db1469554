//! Storefront CLI - browse the catalog and manage the cart from a terminal.
//!
//! Commands:
//! - `storefront list` - List the catalog, optionally filtered
//! - `storefront cart` - Show the cart
//! - `storefront buy` - Add a product to the cart
//! - `storefront remove` - Remove a cart entry by position
//! - `storefront render` - Print the storefront page as HTML
//! - `storefront config` - Show the effective configuration

mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::task::LocalSet;

use commands::{BuyArgs, ListArgs, RemoveArgs, RenderArgs};

/// Storefront CLI - browse the catalog and manage the cart
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Backend base URL (overrides config and STOREFRONT_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    List(ListArgs),

    /// Show the cart
    Cart,

    /// Add a product to the cart
    Buy(BuyArgs),

    /// Remove a cart entry by position
    Remove(RemoveArgs),

    /// Print the storefront page as HTML
    Render(RenderArgs),

    /// Show the effective configuration
    Config,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.api_url.as_deref(), output)?;

    if let Err(e) = storefront_app::init_logging(&ctx.config.logging) {
        ctx.output.warn(&format!("{:#}", e));
    }

    // The storefront is single-threaded; cart writes run on this LocalSet.
    let local = LocalSet::new();
    let result = local
        .run_until(async {
            match cli.command {
                Commands::List(args) => commands::list::run(args, &ctx).await,
                Commands::Cart => commands::cart::run(&ctx).await,
                Commands::Buy(args) => commands::buy::run(args, &ctx).await,
                Commands::Remove(args) => commands::remove::run(args, &ctx).await,
                Commands::Render(args) => commands::render::run(args, &ctx).await,
                Commands::Config => commands::config::run(&ctx).await,
            }
        })
        .await;

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
