//! Vitrine CLI - drive a shopping cart from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add a product (the price is read from its display label)
//! vitrine add --id p1 --name "Caftan" --price "450.00 DH" --image https://cdn.example.com/caftan.jpg
//!
//! # Adjust quantities
//! vitrine inc p1
//! vitrine dec p1
//!
//! # Show the cart summary
//! vitrine show
//!
//! # Remove a product entirely
//! vitrine remove p1
//! ```
//!
//! # Commands
//!
//! - `add` - Add one unit of a product
//! - `remove` - Remove a product's line
//! - `inc` / `dec` - Change a line's quantity (never below 1)
//! - `show` - Print the cart summary
//! - `count` / `total` - Print the unit count or the total price
//! - `checkout` - Checkout placeholder
//!
//! The cart is stored as JSON under `VITRINE_STORAGE_DIR` (default
//! `.vitrine`), so each invocation is one gesture in a session that spans
//! invocations. Set `VITRINE_LOG_FORMAT=json` for JSON log lines.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vitrine_cart::{CartStore, FileStorage};

mod commands;
mod config;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about = "Vitrine shopping cart")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a product to the cart
    Add {
        /// Product id (generated when omitted)
        #[arg(long)]
        id: Option<String>,

        /// Product name
        #[arg(short, long)]
        name: String,

        /// Price label, e.g. "149.90 DH"
        #[arg(short, long)]
        price: String,

        /// Image URL
        #[arg(short, long, default_value = "")]
        image: String,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        id: String,
    },
    /// Add one unit to a product already in the cart
    Inc {
        /// Product id
        id: String,
    },
    /// Take one unit off a product in the cart (stops at 1)
    Dec {
        /// Product id
        id: String,
    },
    /// Show the cart summary
    Show,
    /// Show the number of units in the cart
    Count,
    /// Show the cart total
    Total,
    /// Proceed to checkout
    Checkout,
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "vitrine_cli=info,vitrine_cart=info".into());

    // JSON lines when VITRINE_LOG_FORMAT=json, plain text otherwise
    let json = std::env::var("VITRINE_LOG_FORMAT").is_ok_and(|format| format == "json");
    let json_layer = json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let storage = FileStorage::new(&config.storage_dir);
    let mut store = CartStore::open_with_key(storage, config.cart_key);

    match cli.command {
        Commands::Add {
            id,
            name,
            price,
            image,
        } => commands::cart::add(&mut store, id, name, price, image)?,
        Commands::Remove { id } => commands::cart::remove(&mut store, &id)?,
        Commands::Inc { id } => commands::cart::increment(&mut store, &id)?,
        Commands::Dec { id } => commands::cart::decrement(&mut store, &id)?,
        Commands::Show => commands::cart::show(&store),
        Commands::Count => commands::cart::count(&store),
        Commands::Total => commands::cart::total(&store),
        Commands::Checkout => commands::cart::checkout(&store),
    }
    Ok(())
}
