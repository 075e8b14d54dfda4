//! Basket CLI - a terminal storefront client.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog, optionally filtered by name or category
//! basket products --search fruit
//!
//! # Store a credential token, then check who it belongs to
//! basket login <token>
//! basket whoami
//!
//! # Edit the cart (pushed to the backend when logged in)
//! basket cart add <product-id>
//! basket cart set <product-id> 3
//! basket cart remove <product-id>
//! basket cart show
//!
//! # Write the effective settings to the platform config file
//! basket config init
//! ```
//!
//! Every run loads the session and catalog first, and waits for cart
//! pushes to finish before exiting.

#![cfg_attr(not(test), forbid(unsafe_code))]

use basket_client::{AppStore, ClientConfig, HttpApi, TokenStore, TracingNotifier};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "basket")]
#[command(author, version, about = "Storefront client for the Basket backend")]
struct Cli {
    /// Config file (defaults to basket.toml in the platform config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Products {
        /// Case-insensitive filter on name or category
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show the logged-in user and seller status
    Whoami,
    /// Store a credential token
    Login {
        /// Bearer token issued by the backend
        token: String,
    },
    /// Forget the stored credential token
    Logout,
    /// Inspect or edit the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Inspect or write the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents, item count and total
    Show,
    /// Add one unit of a product
    Add { product_id: String },
    /// Set a product's quantity (0 keeps the line)
    Set { product_id: String, quantity: u32 },
    /// Remove one unit of a product
    Remove { product_id: String },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective settings
    Show,
    /// Write the effective settings to the config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides the default of `info,basket=debug`.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,basket=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::load(cli.config.clone())?;

    // Config commands work without a backend
    let command = match cli.command {
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => commands::config::show(&config),
                ConfigAction::Init { force } => commands::config::init(&config, cli.config, force)?,
            }
            return Ok(());
        }
        command => command,
    };

    let api = Arc::new(HttpApi::new(&config.backend)?);
    let token_path = config
        .token_path()
        .ok_or("No data directory available for the token file")?;

    let (store, sync) = AppStore::new(
        api,
        Arc::new(TracingNotifier),
        TokenStore::new(token_path),
        config.currency(),
    );

    let result = match command {
        Commands::Products { search } => {
            commands::catalog::products(&store, search).await;
            Ok(())
        }
        Commands::Whoami => {
            commands::session::whoami(&store).await;
            Ok(())
        }
        Commands::Login { token } => commands::session::login(&store, token).await,
        Commands::Logout => commands::session::logout(&store),
        Commands::Cart { action } => {
            store.init().await;
            match action {
                CartAction::Show => {}
                CartAction::Add { product_id } => store.add_to_cart(&product_id),
                CartAction::Set {
                    product_id,
                    quantity,
                } => store.update_cart_item(&product_id, quantity),
                CartAction::Remove { product_id } => store.remove_from_cart(&product_id),
            }
            commands::cart::show(&store);
            Ok(())
        }
        Commands::Config { .. } => Ok(()),
    };

    sync.shutdown().await;
    result.map_err(Into::into)
}
