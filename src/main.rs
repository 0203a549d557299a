use anyhow::Context;
use clap::Parser;
use eco_cart::core::actor::DEFAULT_CHANNEL_CAPACITY;
use eco_cart::core::cart::build_report;
use eco_cart::core::score::{format_display_score, label_for_normalized, MAX_DISPLAY_SCORE};
use eco_cart::utils::error::ErrorSeverity;
use eco_cart::utils::{logger, validation::Validate};
use eco_cart::{
    CartActor, CartService, CartStore, CatalogConfig, CatalogProvider, CliConfig, Command,
    EcoCartError, LoggingObserver,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        exit_with(e);
    }

    let catalog = match load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(e) => exit_with(e),
    };

    let result = match &config.command {
        Command::Products => {
            list_products(&catalog);
            Ok(())
        }
        Command::Show { name } => show_product(&catalog, name),
        Command::Cart { add, remove, json } => run_cart(&catalog, add, remove, *json).await,
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            if let Some(cart_error) = e.downcast_ref::<EcoCartError>() {
                tracing::error!(
                    "❌ {} (Severity: {:?})",
                    cart_error,
                    cart_error.severity()
                );
                eprintln!("❌ {}", cart_error.user_friendly_message());
                eprintln!("💡 {}", cart_error.recovery_suggestion());
                std::process::exit(exit_code(cart_error.severity()));
            }
            Err(e)
        }
    }
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn exit_with(e: EcoCartError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(e.severity()).max(1));
}

fn load_catalog(config: &CliConfig) -> eco_cart::Result<CatalogConfig> {
    let catalog = match &config.catalog {
        Some(path) => {
            tracing::info!("📁 Loading catalog from: {}", path);
            CatalogConfig::from_file(path)?
        }
        None => CatalogConfig::builtin()?,
    };
    catalog.validate()?;
    tracing::debug!(
        "Catalog '{}' loaded with {} products",
        catalog.catalog.name,
        catalog.products().len()
    );
    Ok(catalog)
}

fn list_products(catalog: &CatalogConfig) {
    for product in catalog.products() {
        let label = label_for_normalized(product.score / MAX_DISPLAY_SCORE);
        println!(
            "{:<20} {:>10}  {}",
            product.name,
            format_display_score(product.score),
            label
        );
    }
}

fn show_product(catalog: &CatalogConfig, name: &str) -> anyhow::Result<()> {
    let detail = catalog.require_product(name)?.detail();
    let score = detail.score();

    println!("{}  {}", detail.product().name, score.score_line());
    println!();
    println!("Score Breakdown:");
    for line in score.breakdown_lines() {
        println!("  {}", line);
    }
    println!();
    println!("Why this score?");
    for line in score.rationale() {
        println!("  • {}", line);
    }
    Ok(())
}

async fn run_cart(
    catalog: &CatalogConfig,
    add: &[String],
    remove: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let (cart, task) = CartActor::new(CartStore::new())
        .with_observer(Arc::new(LoggingObserver))
        .spawn(DEFAULT_CHANNEL_CAPACITY);

    for name in add {
        let mut detail = catalog.require_product(name)?.detail();
        if !detail.submit(&cart).await? {
            tracing::info!("'{}' is already in the cart", name);
        }
    }

    for name in remove {
        let snapshot = cart.snapshot().await?;
        match snapshot.iter().find(|e| e.name() == name) {
            Some(entry) => {
                cart.remove(entry.id()).await?;
            }
            None => tracing::warn!("'{}' is not in the cart", name),
        }
    }

    let entries = cart.snapshot().await?;
    let aggregate = cart.aggregate_score().await?;
    drop(cart);
    task.await.context("cart task failed")?;

    if json {
        let report = build_report(entries, aggregate);
        println!(
            "{}",
            serde_json::to_string_pretty(&report).map_err(EcoCartError::from)?
        );
        return Ok(());
    }

    if entries.is_empty() {
        println!("Your cart is empty");
        return Ok(());
    }

    for entry in &entries {
        println!("{:<20} {}  ({})", entry.name(), entry.score_line(), entry.description());
    }
    println!();
    println!("Overall Score: {}", format_display_score(aggregate));
    Ok(())
}
