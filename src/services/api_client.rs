// src/services/api_client.rs
use crate::errors::ArmarioError;
use crate::models::{FiltersResponse, GenerateOutfitRequest, ItemDetail, OutfitResponse};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

/// Generation and catalog backend. Behind a trait so the session logic can be
/// exercised against a canned implementation in tests.
#[async_trait]
pub trait OutfitApi: Send + Sync {
    async fn generate_outfit(
        &self,
        payload: &GenerateOutfitRequest,
    ) -> Result<OutfitResponse, ArmarioError>;

    async fn fetch_items_by_ids(
        &self,
        item_ids: &[String],
    ) -> Result<Vec<ItemDetail>, ArmarioError>;

    async fn fetch_catalog(&self) -> Result<Vec<ItemDetail>, ArmarioError>;

    async fn fetch_filters(&self) -> Result<FiltersResponse, ArmarioError>;
}

pub struct ApiService {
    base_url: String,
    client: Client,
}

impl ApiService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Non-2xx responses become `Api` errors carrying the body's `detail`
    /// field when it parses, else a generic HTTP message.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ArmarioError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        Err(ArmarioError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl OutfitApi for ApiService {
    async fn generate_outfit(
        &self,
        payload: &GenerateOutfitRequest,
    ) -> Result<OutfitResponse, ArmarioError> {
        let response = self
            .client
            .post(format!("{}/ai/generate-outfit", self.base_url))
            .json(payload)
            .send()
            .await
            .map_err(|e| ArmarioError::Network(format!("generate-outfit request failed: {}", e)))?;

        let response = Self::check(response).await?;
        response.json().await.map_err(|e| {
            ArmarioError::Serialization(format!("failed to parse outfit response: {}", e))
        })
    }

    async fn fetch_items_by_ids(
        &self,
        item_ids: &[String],
    ) -> Result<Vec<ItemDetail>, ArmarioError> {
        // Nothing to look up; skip the round trip.
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        debug!("fetching {} item details", item_ids.len());
        let response = self
            .client
            .post(format!("{}/items", self.base_url))
            .json(&serde_json::json!({ "item_ids": item_ids }))
            .send()
            .await
            .map_err(|e| ArmarioError::Network(format!("item detail request failed: {}", e)))?;

        let response = Self::check(response).await?;
        response.json().await.map_err(|e| {
            ArmarioError::Serialization(format!("failed to parse item details: {}", e))
        })
    }

    async fn fetch_catalog(&self) -> Result<Vec<ItemDetail>, ArmarioError> {
        let response = self
            .client
            .get(format!("{}/items", self.base_url))
            .send()
            .await
            .map_err(|e| ArmarioError::Network(format!("catalog request failed: {}", e)))?;

        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ArmarioError::Serialization(format!("failed to parse catalog: {}", e)))
    }

    async fn fetch_filters(&self) -> Result<FiltersResponse, ArmarioError> {
        let response = self
            .client
            .get(format!("{}/filters", self.base_url))
            .send()
            .await
            .map_err(|e| ArmarioError::Network(format!("filters request failed: {}", e)))?;

        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ArmarioError::Serialization(format!("failed to parse filters: {}", e)))
    }
}
