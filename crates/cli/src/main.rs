//! Tandoor CLI - drive the restaurant cart from a terminal.
//!
//! Each invocation is one visitor action against the cart persisted under
//! `TANDOOR_STORE_DIR`, so consecutive commands behave like consecutive
//! clicks on the site.
//!
//! # Usage
//!
//! ```bash
//! # Add dishes
//! tandoor add "Paneer Tikka" 250
//! tandoor order naan
//!
//! # Adjust and inspect
//! tandoor set "Paneer Tikka" 3
//! tandoor show
//!
//! # Send the order to the restaurant's chat
//! tandoor checkout
//!
//! # Request a table
//! tandoor reserve --name "Asha Rao" --phone "+91 98765 43210" \
//!     --email asha@example.com --guests 4 --date 2026-10-20 --time 19:30
//!
//! # Browse the menu
//! tandoor menu --diet veg --search paneer
//! ```
//!
//! Notifications and logs go to stderr; the cart and menu go to stdout.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tandoor_cart::CartConfig;
use tandoor_core::DietFilter;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tandoor")]
#[command(author, version, about = "Tandoor restaurant cart")]
struct Cli {
    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart
    Show,
    /// Add one unit of a dish at the given price
    Add {
        /// Dish name
        name: String,
        /// Unit price, e.g. 250 or 45.50
        #[arg(allow_hyphen_values = true)]
        price: String,
    },
    /// Add one unit of a menu dish at its menu price
    Order {
        /// Dish name as listed on the menu
        dish: String,
    },
    /// Remove a dish from the cart
    Remove {
        /// Dish name
        name: String,
    },
    /// Set the quantity of a dish already in the cart
    Set {
        /// Dish name
        name: String,
        /// New quantity; values below 1 become 1
        #[arg(allow_hyphen_values = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
    /// Send the cart to the restaurant's chat and empty it
    Checkout,
    /// Request a table through the restaurant's chat
    Reserve(commands::reserve::ReserveArgs),
    /// List the menu
    Menu {
        /// Case-insensitive text to look for in dish names
        #[arg(short, long)]
        search: Option<String>,
        /// Category to show (`all` for every category)
        #[arg(short, long, default_value = "all")]
        category: String,
        /// Dietary filter (`all`, `veg`, `non-veg`)
        #[arg(short, long, default_value = "all")]
        diet: DietFilter,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Install the subscriber on stderr.
///
/// Defaults to info level for our crates if `RUST_LOG` is not set.
fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tandoor_cli=info,tandoor_cart=info".into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Show => commands::cart::show(&config),
        Commands::Add { name, price } => commands::cart::add(&config, &name, &price)?,
        Commands::Order { dish } => commands::cart::order(&config, &dish)?,
        Commands::Remove { name } => commands::cart::remove(&config, &name),
        Commands::Set { name, quantity } => commands::cart::set(&config, &name, quantity),
        Commands::Clear => commands::cart::clear(&config),
        Commands::Checkout => commands::cart::checkout(&config),
        Commands::Reserve(args) => commands::reserve::reserve(&config, args),
        Commands::Menu {
            search,
            category,
            diet,
        } => commands::menu::list(config.currency, search.as_deref(), &category, diet)?,
    }
    Ok(())
}
