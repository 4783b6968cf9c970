// src/catalog.rs
use crate::models::{Gender, ItemDetail};

/// Static reference catalog used as a lookup fallback for item ids that have
/// not been fetched from the backend yet (or when the catalog is unreachable).
pub fn reference_catalog() -> Vec<ItemDetail> {
    vec![
        ItemDetail {
            item_id: "item_id_1".to_string(),
            name: "Polera con motivo estampado Loose Fit".to_string(),
            price: 8990.0,
            sizes: vec!["XS", "S", "M", "L", "XL"]
                .into_iter()
                .map(String::from)
                .collect(),
            sizing_schema: Some("letter".to_string()),
            availability: None,
            available_sizes: None,
            unavailable_sizes: None,
            photo_url: "/assets/outfit/top.png".to_string(),
            gender: Some(vec![Gender::Female]),
            category: Some("top".to_string()),
            tags: Some(vec![
                "summer".to_string(),
                "casual".to_string(),
                "algodón".to_string(),
            ]),
        },
        ItemDetail {
            item_id: "item_id_2".to_string(),
            name: "Shorts beige de algodón".to_string(),
            price: 7990.0,
            sizes: vec!["28", "30", "32", "34", "36", "38"]
                .into_iter()
                .map(String::from)
                .collect(),
            sizing_schema: Some("waist".to_string()),
            availability: None,
            available_sizes: None,
            unavailable_sizes: None,
            photo_url: "/assets/outfit/bottom.png".to_string(),
            gender: Some(vec![Gender::Male, Gender::Female]),
            category: Some("bottom".to_string()),
            tags: Some(vec!["casual".to_string(), "beige".to_string()]),
        },
        ItemDetail {
            item_id: "item_id_3".to_string(),
            name: "Calcetas blancas deportivas".to_string(),
            price: 3990.0,
            sizes: vec!["35-37", "38-40", "41-43", "44-46"]
                .into_iter()
                .map(String::from)
                .collect(),
            sizing_schema: Some("shoe_range".to_string()),
            availability: None,
            available_sizes: None,
            unavailable_sizes: None,
            photo_url: "/assets/outfit/socks.png".to_string(),
            gender: Some(vec![Gender::Any]),
            category: Some("accessory".to_string()),
            tags: Some(vec!["sport".to_string(), "socks".to_string()]),
        },
    ]
}
