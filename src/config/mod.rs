pub mod catalog;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "eco-cart")]
#[command(about = "Browse eco scores and build a scored shopping cart")]
pub struct CliConfig {
    /// Path to a TOML product catalog (defaults to the built-in catalog)
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List catalog products with their eco score
    Products,

    /// Show a product's score breakdown and rationale
    Show {
        /// Exact product name
        name: String,
    },

    /// Build a cart: all adds run first, then all removes
    Cart {
        #[arg(long = "add", value_name = "NAME")]
        add: Vec<String>,

        #[arg(long = "remove", value_name = "NAME")]
        remove: Vec<String>,

        /// Print the cart as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog {
            validation::validate_path("catalog", path)?;
        }
        if let Command::Show { name } = &self.command {
            validation::validate_non_empty_string("name", name)?;
        }
        Ok(())
    }
}
