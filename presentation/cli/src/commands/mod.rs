use clap::{Parser, Subcommand};

use business::domain::cart::errors::CartError;
use business::domain::cart::outcome::PersistenceWarning;

pub mod cart;

#[derive(Parser)]
#[command(name = "cart-cli")]
#[command(author, version, about = "Storefront cart tools")]
pub struct Cli {
    /// Print the cart as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the stored cart of a user
    Show {
        #[arg(short, long)]
        user: String,
    },
    /// Add a product, merging with an existing line of the same id
    Add {
        #[arg(short, long)]
        user: String,

        /// Product identifier
        #[arg(long)]
        id: String,

        #[arg(long)]
        title: String,

        /// Unit price in the smallest currency unit
        #[arg(long)]
        price: u64,

        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        count: i64,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Image URL
        #[arg(long)]
        image: Option<String>,
    },
    /// Remove a product line
    Remove {
        #[arg(short, long)]
        user: String,

        #[arg(long)]
        id: String,
    },
    /// Set the count of a product line
    SetCount {
        #[arg(short, long)]
        user: String,

        #[arg(long)]
        id: String,

        #[arg(short, long, allow_negative_numbers = true)]
        count: i64,
    },
    /// Empty the cart and erase its stored record
    Reset {
        #[arg(short, long)]
        user: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cart.user_required")]
    UserRequired,
    /// The stored cart could not be loaded, so it is left as it is.
    #[error("{0}")]
    StorageUnavailable(PersistenceWarning),
    #[error(transparent)]
    Cart(#[from] CartError),
}
