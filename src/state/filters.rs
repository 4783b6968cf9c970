// src/state/filters.rs
use crate::models::{Gender, SizeSchemaOption};
use std::collections::HashMap;

/// Id prefix distinguishing kids size schemas from the standard variants.
pub const KIDS_SCHEMA_PREFIX: &str = "kids_";

/// User-selected filters shaping the next generation request.
#[derive(Debug, Default)]
pub struct FilterState {
    gender: Option<Gender>,
    categories: Vec<String>,
    size_filters: HashMap<String, Vec<String>>,
    price_min: Option<f64>,
    price_max: Option<f64>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn size_filters(&self) -> &HashMap<String, Vec<String>> {
        &self.size_filters
    }

    pub fn price_bounds(&self) -> (Option<f64>, Option<f64>) {
        (self.price_min, self.price_max)
    }

    /// Add if absent, remove if present.
    pub fn toggle_category(&mut self, category: &str) {
        if let Some(i) = self.categories.iter().position(|c| c == category) {
            self.categories.remove(i);
        } else {
            self.categories.push(category.to_string());
        }
    }

    /// Toggle one size under a schema. A schema whose size set empties is
    /// dropped entirely, never kept as an empty entry.
    pub fn toggle_size(&mut self, schema_id: &str, size: &str) {
        let sizes = self.size_filters.entry(schema_id.to_string()).or_default();
        if let Some(i) = sizes.iter().position(|s| s == size) {
            sizes.remove(i);
        } else {
            sizes.push(size.to_string());
        }
        if sizes.is_empty() {
            self.size_filters.remove(schema_id);
        }
    }

    /// Single-select gender. Picking a gender prunes size selections under
    /// schemas of the other namespace, so a stale kids pick cannot silently
    /// apply after switching back to adult sizing (and vice versa). Clearing
    /// the gender prunes nothing.
    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.gender = gender;
        if let Some(g) = gender {
            let kids = g == Gender::Kids;
            self.size_filters
                .retain(|schema_id, _| schema_in_namespace(schema_id, kids));
        }
    }

    /// Independent optional bounds; None means unbounded on that side.
    pub fn set_price_bounds(&mut self, min: Option<f64>, max: Option<f64>) {
        self.price_min = min;
        self.price_max = max;
    }

    /// Derived view over the schema catalog: with a gender picked, only the
    /// matching namespace is shown; with none, everything is.
    pub fn visible_schemas<'a>(&self, schemas: &'a [SizeSchemaOption]) -> Vec<&'a SizeSchemaOption> {
        match self.gender {
            None => schemas.iter().collect(),
            Some(g) => {
                let kids = g == Gender::Kids;
                schemas
                    .iter()
                    .filter(|schema| schema_in_namespace(&schema.id, kids))
                    .collect()
            }
        }
    }
}

fn schema_in_namespace(schema_id: &str, kids: bool) -> bool {
    if kids {
        schema_id.starts_with(KIDS_SCHEMA_PREFIX)
    } else {
        !schema_id.starts_with(KIDS_SCHEMA_PREFIX)
    }
}
