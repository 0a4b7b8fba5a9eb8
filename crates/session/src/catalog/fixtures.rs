//! Built-in demo catalog.
//!
//! A small fixture set so the CLI and tests have something to browse without
//! an external catalog file. Not real inventory.

use chrono::NaiveDate;

use begeto_core::{CreatorId, CurrencyCode, Price, ProductId};

use super::{CatalogStore, Category, Creator, Product};

fn product(
    id: &str,
    name: &str,
    maker: &str,
    maker_id: &str,
    country: &str,
    price: i64,
    category: Category,
    cultural_context: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        maker: maker.to_owned(),
        maker_id: CreatorId::new(maker_id),
        country: country.to_owned(),
        price: Price::from_major(price, CurrencyCode::USD),
        image: format!("/images/products/{id}.jpg"),
        description: format!("{name}, handmade by {maker}."),
        category,
        cultural_context: cultural_context.to_owned(),
        featured: false,
        trending: false,
        custom_made: false,
    }
}

fn creator(
    id: &str,
    name: &str,
    country: &str,
    region: &str,
    specialties: &[&str],
    products_count: u32,
    rating: f32,
    joined: (i32, u32, u32),
) -> Creator {
    Creator {
        id: CreatorId::new(id),
        name: name.to_owned(),
        country: country.to_owned(),
        region: region.to_owned(),
        bio: format!("{name} crafts {} pieces in {region}.", specialties.join(" and ")),
        avatar: format!("/images/creators/{id}.jpg"),
        cover_image: format!("/images/creators/{id}-cover.jpg"),
        specialties: specialties.iter().map(|&s| s.to_owned()).collect(),
        products_count,
        rating,
        joined_date: NaiveDate::from_ymd_opt(joined.0, joined.1, joined.2)
            .unwrap_or_default(),
    }
}

/// The demo catalog used by the CLI and the test suites.
#[must_use]
pub fn demo_catalog() -> CatalogStore {
    let products = vec![
        Product {
            featured: true,
            ..product(
                "kente-wrap-dress",
                "Kente Wrap Dress",
                "Abena Osei",
                "abena-osei",
                "Ghana",
                85,
                Category::Dresses,
                "Woven kente strips from the Ashanti region, sewn into a modern wrap cut.",
            )
        },
        Product {
            trending: true,
            custom_made: true,
            ..product(
                "indigo-mud-cloth-jacket",
                "Indigo Mud Cloth Jacket",
                "Moussa Traore",
                "moussa-traore",
                "Mali",
                120,
                Category::Outerwear,
                "Bogolanfini mud cloth dyed with fermented river mud, cut as a chore jacket.",
            )
        },
        Product {
            featured: true,
            ..product(
                "oaxacan-embroidered-top",
                "Oaxacan Embroidered Top",
                "Rosa Mendez",
                "rosa-mendez",
                "Mexico",
                45,
                Category::Tops,
                "Hand-embroidered florals in the San Antonino style.",
            )
        },
        product(
            "beaded-maasai-collar",
            "Beaded Maasai Collar",
            "Naserian Kipas",
            "naserian-kipas",
            "Kenya",
            35,
            Category::Jewelry,
            "Flat beaded collar in the colors worn for Maasai ceremonies.",
        ),
        Product {
            custom_made: true,
            ..product(
                "silk-headwrap",
                "Hand-Dyed Silk Headwrap",
                "Abena Osei",
                "abena-osei",
                "Ghana",
                28,
                Category::Headwear,
                "Adinkra-stamped silk, wrapped and tied in the Accra style.",
            )
        },
        product(
            "alpaca-woven-scarf",
            "Alpaca Woven Scarf",
            "Lucia Quispe",
            "lucia-quispe",
            "Peru",
            55,
            Category::Accessories,
            "Backstrap-loom weave in undyed alpaca from the Sacred Valley.",
        ),
    ];

    let creators = vec![
        creator(
            "abena-osei",
            "Abena Osei",
            "Ghana",
            "Ashanti Region",
            &["kente weaving", "silk dyeing"],
            12,
            4.9,
            (2021, 3, 14),
        ),
        creator(
            "moussa-traore",
            "Moussa Traore",
            "Mali",
            "Segou",
            &["mud cloth", "tailoring"],
            8,
            4.7,
            (2022, 7, 2),
        ),
        creator(
            "rosa-mendez",
            "Rosa Mendez",
            "Mexico",
            "Oaxaca",
            &["embroidery"],
            15,
            4.8,
            (2020, 11, 30),
        ),
        creator(
            "naserian-kipas",
            "Naserian Kipas",
            "Kenya",
            "Kajiado County",
            &["beadwork"],
            9,
            5.0,
            (2023, 1, 18),
        ),
        creator(
            "lucia-quispe",
            "Lucia Quispe",
            "Peru",
            "Cusco",
            &["weaving"],
            11,
            4.6,
            (2022, 2, 9),
        ),
    ];

    CatalogStore::new(products, creators)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_is_consistent() {
        let store = demo_catalog();
        assert!(!store.all_products().is_empty());
        assert!(!store.creators().is_empty());

        // Every product's maker must exist in the creator list.
        for product in store.all_products() {
            assert!(
                store.creator(&product.maker_id).is_some(),
                "missing creator for {}",
                product.id
            );
        }
    }

    #[test]
    fn test_demo_catalog_ids_are_unique() {
        let store = demo_catalog();
        let mut ids: Vec<_> = store.all_products().iter().map(|p| &p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), store.all_products().len());
    }
}
