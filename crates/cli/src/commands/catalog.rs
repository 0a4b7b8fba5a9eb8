//! Catalog query commands.

use rust_decimal::Decimal;
use tracing::info;

use begeto_core::ProductId;
use begeto_session::catalog::{Category, ProductFilter, ProductSort};

use crate::config::CliConfig;

/// List products matching the given filters.
///
/// # Errors
///
/// Returns an error if the configured catalog cannot be loaded.
pub fn products(
    config: &CliConfig,
    query: Option<String>,
    categories: Vec<Category>,
    countries: Vec<String>,
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
    sort: ProductSort,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = config.open_catalog()?;
    let filter = ProductFilter {
        query,
        categories,
        countries,
        min_price,
        max_price,
        sort,
    };

    let listed = store.products(&filter);
    info!("{} of {} products", listed.len(), store.all_products().len());

    if listed.is_empty() {
        info!(
            "No products matched; countries on offer: {}",
            store.countries().join(", ")
        );
        return Ok(());
    }

    for product in listed {
        let mut flags = Vec::new();
        if product.featured {
            flags.push("featured");
        }
        if product.trending {
            flags.push("trending");
        }
        if product.custom_made {
            flags.push("custom-made");
        }
        let flags = if flags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", flags.join(", "))
        };

        info!(
            "  {}  {} - {} ({}) {}{flags}",
            product.id, product.name, product.maker, product.country, product.price
        );
    }

    Ok(())
}

/// List all creators.
///
/// # Errors
///
/// Returns an error if the configured catalog cannot be loaded.
pub fn creators(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = config.open_catalog()?;

    info!("{} creators", store.creators().len());
    for creator in store.creators() {
        info!(
            "  {}  {} - {}, {} (rating {:.1}, {} products)",
            creator.id,
            creator.name,
            creator.region,
            creator.country,
            creator.rating,
            creator.products_count
        );
    }

    Ok(())
}

/// Show one product in detail.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the id is unknown.
pub fn show(config: &CliConfig, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = config.open_catalog()?;
    let id = ProductId::new(id);

    let Some(product) = store.product(&id) else {
        return Err(format!("Product not found: {id}").into());
    };

    info!("{} ({})", product.name, product.id);
    info!("  Maker:    {} ({})", product.maker, product.country);
    info!("  Category: {}", product.category);
    info!("  Price:    {}", product.price);
    info!("  {}", product.description);
    info!("  Context:  {}", product.cultural_context);

    if let Some(creator) = store.creator(&product.maker_id) {
        info!(
            "  By {} - {} (joined {})",
            creator.name,
            creator.specialties.join(", "),
            creator.joined_date
        );
    }

    Ok(())
}
