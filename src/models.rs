// src/models.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Kids,
    Any,
}

/// Payload for the outfit-generation endpoint. Optional fields are omitted
/// from the wire entirely rather than sent as null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOutfitRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_filters: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,
    /// Reserved for "keep this item, regenerate the rest" flows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked_items: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitSuggestion {
    pub item_id: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitResponse {
    pub session_id: String,
    #[serde(default)]
    pub conversational_response: String,
    #[serde(default)]
    pub outfit_suggestions: Vec<OutfitSuggestion>,
}

/// Canonical product record served by the catalog. The backend mixes
/// snake_case and camelCase field names, hence the explicit renames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDetail {
    pub item_id: String,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(rename = "sizingSchema", skip_serializing_if = "Option::is_none")]
    pub sizing_schema: Option<String>,
    /// Per-size remaining stock counts, when the catalog exposes them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<HashMap<String, u32>>,
    #[serde(rename = "availableSizes", skip_serializing_if = "Option::is_none")]
    pub available_sizes: Option<Vec<String>>,
    #[serde(rename = "unavailableSizes", skip_serializing_if = "Option::is_none")]
    pub unavailable_sizes: Option<Vec<String>>,
    #[serde(default)]
    pub photo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Vec<Gender>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Display-ready view record derived from a suggestion plus its catalog row.
/// Every field is always populated; missing catalog data degrades to
/// defaults instead of leaving holes for the renderer to trip on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub sizes: Vec<String>,
    pub photo_url: String,
    pub comment: String,
    pub available_sizes: Vec<String>,
    pub unavailable_sizes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    pub price: f64,
    pub size: String,
    pub quantity: u32,
    pub photo_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteLine {
    pub item_id: String,
    pub name: String,
    pub price: f64,
    pub size: String,
    pub photo_url: String,
}

/// A named set of valid size labels, e.g. letter sizes vs. numeric waist
/// sizes. Kids variants are namespaced with a `kids_` id prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeSchemaOption {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub sizes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FiltersResponse {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub genders: Vec<Gender>,
    #[serde(rename = "sizeSchemas", default)]
    pub size_schemas: Vec<SizeSchemaOption>,
}
