// src/resolver.rs
use crate::models::{ItemDetail, OutfitSuggestion, ProductCard};
use std::collections::HashMap;

/// Merges outfit suggestions with catalog detail records into display-ready
/// product cards. Live-fetched details win over the static fallback catalog.
#[derive(Debug, Default)]
pub struct CatalogResolver {
    details: HashMap<String, ItemDetail>,
    fallback: HashMap<String, ItemDetail>,
}

impl CatalogResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fallback(items: Vec<ItemDetail>) -> Self {
        Self {
            details: HashMap::new(),
            fallback: items
                .into_iter()
                .map(|item| (item.item_id.clone(), item))
                .collect(),
        }
    }

    /// Upserts freshly fetched detail records. Earlier fetches stay cached so
    /// cards from a previous generation keep resolving.
    pub fn merge_details(&mut self, items: Vec<ItemDetail>) {
        for item in items {
            self.details.insert(item.item_id.clone(), item);
        }
    }

    pub fn lookup(&self, item_id: &str) -> Option<&ItemDetail> {
        self.details
            .get(item_id)
            .or_else(|| self.fallback.get(item_id))
    }

    /// Pure derivation: one card per suggestion, preserving suggestion order.
    /// A suggestion with no catalog match still yields a card with degraded
    /// fields rather than being dropped.
    pub fn resolve(&self, suggestions: &[OutfitSuggestion]) -> Vec<ProductCard> {
        suggestions.iter().map(|s| self.resolve_one(s)).collect()
    }

    fn resolve_one(&self, suggestion: &OutfitSuggestion) -> ProductCard {
        let catalog = self.lookup(&suggestion.item_id);

        // Name precedence: suggestion, then catalog, then the raw id.
        let name = if !suggestion.item_name.trim().is_empty() {
            suggestion.item_name.clone()
        } else {
            catalog
                .map(|c| c.name.clone())
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| suggestion.item_id.clone())
        };

        let available_sizes = catalog
            .and_then(|c| c.available_sizes.clone())
            .or_else(|| catalog.map(|c| c.sizes.clone()))
            .unwrap_or_default();

        ProductCard {
            id: suggestion.item_id.clone(),
            name,
            price: catalog.map(|c| c.price).unwrap_or(0.0),
            sizes: catalog.map(|c| c.sizes.clone()).unwrap_or_default(),
            photo_url: catalog.map(|c| c.photo_url.clone()).unwrap_or_default(),
            comment: suggestion.comment.clone(),
            available_sizes,
            unavailable_sizes: catalog
                .and_then(|c| c.unavailable_sizes.clone())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(item_id: &str, name: &str, price: f64, sizes: &[&str]) -> ItemDetail {
        ItemDetail {
            item_id: item_id.to_string(),
            name: name.to_string(),
            price,
            sizes: sizes.iter().map(|s| s.to_string()).collect(),
            sizing_schema: None,
            availability: None,
            available_sizes: None,
            unavailable_sizes: None,
            photo_url: String::new(),
            gender: None,
            category: None,
            tags: None,
        }
    }

    fn suggestion(item_id: &str, item_name: &str, comment: &str) -> OutfitSuggestion {
        OutfitSuggestion {
            item_id: item_id.to_string(),
            item_name: item_name.to_string(),
            comment: comment.to_string(),
        }
    }

    #[test]
    fn resolves_against_cached_detail() {
        let mut resolver = CatalogResolver::new();
        resolver.merge_details(vec![detail("a", "Shirt", 100.0, &["S", "M"])]);

        let cards = resolver.resolve(&[suggestion("a", "", "x")]);

        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.id, "a");
        assert_eq!(card.name, "Shirt");
        assert_eq!(card.price, 100.0);
        assert_eq!(card.sizes, vec!["S", "M"]);
        assert_eq!(card.available_sizes, vec!["S", "M"]);
        assert!(card.unavailable_sizes.is_empty());
        assert_eq!(card.comment, "x");
    }

    #[test]
    fn missing_catalog_row_degrades_instead_of_dropping() {
        let resolver = CatalogResolver::new();

        let cards = resolver.resolve(&[suggestion("z", "Mystery", "y")]);

        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.id, "z");
        assert_eq!(card.name, "Mystery");
        assert_eq!(card.price, 0.0);
        assert!(card.sizes.is_empty());
        assert!(card.available_sizes.is_empty());
        assert_eq!(card.comment, "y");
    }

    #[test]
    fn suggestion_name_wins_over_catalog_name() {
        let mut resolver = CatalogResolver::new();
        resolver.merge_details(vec![detail("a", "Catalog Name", 50.0, &[])]);

        let cards = resolver.resolve(&[suggestion("a", "Suggested Name", "")]);
        assert_eq!(cards[0].name, "Suggested Name");
    }

    #[test]
    fn blank_names_fall_back_to_raw_id() {
        let mut resolver = CatalogResolver::new();
        resolver.merge_details(vec![detail("a", "", 50.0, &[])]);

        let cards = resolver.resolve(&[suggestion("a", "", "")]);
        assert_eq!(cards[0].name, "a");
    }

    #[test]
    fn explicit_available_list_wins_over_full_size_list() {
        let mut d = detail("a", "Shirt", 100.0, &["S", "M", "L"]);
        d.available_sizes = Some(vec!["S".to_string()]);
        d.unavailable_sizes = Some(vec!["M".to_string(), "L".to_string()]);
        let mut resolver = CatalogResolver::new();
        resolver.merge_details(vec![d]);

        let cards = resolver.resolve(&[suggestion("a", "", "")]);
        assert_eq!(cards[0].available_sizes, vec!["S"]);
        assert_eq!(cards[0].unavailable_sizes, vec!["M", "L"]);
        assert_eq!(cards[0].sizes, vec!["S", "M", "L"]);
    }

    #[test]
    fn live_detail_wins_over_fallback() {
        let mut resolver =
            CatalogResolver::with_fallback(vec![detail("a", "Old", 10.0, &["S"])]);
        resolver.merge_details(vec![detail("a", "Fresh", 20.0, &["S", "M"])]);

        let cards = resolver.resolve(&[suggestion("a", "", "")]);
        assert_eq!(cards[0].name, "Fresh");
        assert_eq!(cards[0].price, 20.0);
    }

    #[test]
    fn preserves_suggestion_order_and_count() {
        let mut resolver = CatalogResolver::new();
        resolver.merge_details(vec![detail("b", "B", 1.0, &[])]);

        let cards = resolver.resolve(&[
            suggestion("b", "", ""),
            suggestion("missing", "", ""),
            suggestion("b", "", ""),
        ]);
        let ids: Vec<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "missing", "b"]);
    }
}
