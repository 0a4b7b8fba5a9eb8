//! Begeto CLI - Catalog browsing and shopping-session tools.
//!
//! # Usage
//!
//! ```bash
//! # List products, filtered and sorted
//! begeto catalog products --query kente --sort price-low-to-high
//!
//! # List creators
//! begeto catalog creators
//!
//! # Show one product
//! begeto catalog show kente-wrap-dress
//!
//! # Save or display the measurement draft
//! begeto measure set --height 170 --chest 95 --unit cm
//! begeto measure show
//!
//! # Walk a complete scripted shopping session
//! begeto demo
//! ```
//!
//! # Commands
//!
//! - `catalog` - Query the product/creator catalog
//! - `measure` - Manage the locally persisted measurement draft
//! - `demo` - Run a full browse-to-order session against the demo catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use begeto_session::catalog::{Category, ProductSort};
use begeto_session::measurements::MeasurementUnit;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "begeto")]
#[command(author, version, about = "Begeto marketplace CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the product and creator catalog
    Catalog {
        #[command(subcommand)]
        target: CatalogTarget,
    },
    /// Manage the measurement draft
    Measure {
        #[command(subcommand)]
        action: MeasureAction,
    },
    /// Run a scripted end-to-end shopping session
    Demo,
}

#[derive(Subcommand)]
enum CatalogTarget {
    /// List products matching the given filters
    Products {
        /// Match against product name, maker, or country
        #[arg(short, long)]
        query: Option<String>,

        /// Restrict to these categories (repeatable)
        #[arg(short, long)]
        category: Vec<Category>,

        /// Restrict to these countries (repeatable)
        #[arg(long)]
        country: Vec<String>,

        /// Minimum price, inclusive
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Maximum price, inclusive
        #[arg(long)]
        max_price: Option<Decimal>,

        /// Sort order (`featured`, `price-low-to-high`, `price-high-to-low`, `newest`)
        #[arg(short, long, default_value = "featured")]
        sort: String,
    },
    /// List all creators
    Creators,
    /// Show one product in detail
    Show {
        /// Product id (e.g. `kente-wrap-dress`)
        id: String,
    },
}

#[derive(Subcommand)]
enum MeasureAction {
    /// Save measurement fields to the draft (unset fields keep their value)
    Set {
        #[arg(long)]
        height: Option<String>,
        #[arg(long)]
        weight: Option<String>,
        #[arg(long)]
        chest: Option<String>,
        #[arg(long)]
        waist: Option<String>,
        #[arg(long)]
        hips: Option<String>,
        #[arg(long)]
        shoulders: Option<String>,
        #[arg(long)]
        inseam: Option<String>,
        #[arg(long)]
        sleeve_length: Option<String>,
        #[arg(long)]
        bust: Option<String>,
        #[arg(long)]
        under_bust: Option<String>,
        #[arg(long)]
        dress_length: Option<String>,
        #[arg(long)]
        head_circumference: Option<String>,

        /// Unit the measurements are in (`cm` or `inch`)
        #[arg(short, long)]
        unit: Option<MeasurementUnit>,
    },
    /// Display the stored draft
    Show,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::CliConfig::load();

    match cli.command {
        Commands::Catalog { target } => match target {
            CatalogTarget::Products {
                query,
                category,
                country,
                min_price,
                max_price,
                sort,
            } => {
                let sort: ProductSort = match sort.as_str() {
                    "featured" => ProductSort::Featured,
                    "price-low-to-high" => ProductSort::PriceLowToHigh,
                    "price-high-to-low" => ProductSort::PriceHighToLow,
                    "newest" => ProductSort::Newest,
                    other => return Err(format!("invalid sort order: {other}").into()),
                };
                commands::catalog::products(
                    &config, query, category, country, min_price, max_price, sort,
                )?;
            }
            CatalogTarget::Creators => commands::catalog::creators(&config)?,
            CatalogTarget::Show { id } => commands::catalog::show(&config, &id)?,
        },
        Commands::Measure { action } => match action {
            MeasureAction::Set {
                height,
                weight,
                chest,
                waist,
                hips,
                shoulders,
                inseam,
                sleeve_length,
                bust,
                under_bust,
                dress_length,
                head_circumference,
                unit,
            } => {
                let fields = commands::measure::Fields {
                    height,
                    weight,
                    chest,
                    waist,
                    hips,
                    shoulders,
                    inseam,
                    sleeve_length,
                    bust,
                    under_bust,
                    dress_length,
                    head_circumference,
                    unit,
                };
                commands::measure::set(&config, fields)?;
            }
            MeasureAction::Show => commands::measure::show(&config)?,
        },
        Commands::Demo => commands::demo::run(&config)?,
    }
    Ok(())
}
