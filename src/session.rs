// src/session.rs
use crate::catalog::reference_catalog;
use crate::errors::ArmarioError;
use crate::models::{
    CartLine, FavoriteLine, GenerateOutfitRequest, ItemDetail, OutfitResponse, ProductCard,
};
use crate::resolver::CatalogResolver;
use crate::services::OutfitApi;
use crate::state::{CartLedger, FavoritesLedger, Feedback, FilterState, SelectionState};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Loading,
    Ready,
}

/// Handle for one in-flight generation. Carries the epoch it started under;
/// a completion whose epoch no longer matches the session is stale and gets
/// discarded instead of repopulating state the user has moved past.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    epoch: u64,
    pub payload: GenerateOutfitRequest,
}

/// All client-session state plus the orchestration over it: the prompt/phase
/// machine, the catalog resolver, and the cart/favorites/filter/selection
/// ledgers. Everything is in-memory and dies with the session.
pub struct Storefront {
    pub resolver: CatalogResolver,
    pub selection: SelectionState,
    pub cart: CartLedger,
    pub favorites: FavoritesLedger,
    pub filters: FilterState,
    pub feedback: Feedback,
    prompt: String,
    phase: SessionPhase,
    outfit: Option<OutfitResponse>,
    session_id: Option<String>,
    epoch: u64,
}

impl Storefront {
    pub fn new() -> Self {
        Self::with_resolver(CatalogResolver::with_fallback(reference_catalog()))
    }

    pub fn with_resolver(resolver: CatalogResolver) -> Self {
        Self {
            resolver,
            selection: SelectionState::new(),
            cart: CartLedger::new(),
            favorites: FavoritesLedger::new(),
            filters: FilterState::new(),
            feedback: Feedback::new(),
            prompt: String::new(),
            phase: SessionPhase::Idle,
            outfit: None,
            session_id: None,
            epoch: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn outfit(&self) -> Option<&OutfitResponse> {
        self.outfit.as_ref()
    }

    pub fn conversational_message(&self) -> Option<&str> {
        self.outfit
            .as_ref()
            .map(|o| o.conversational_response.as_str())
            .filter(|m| !m.is_empty())
    }

    /// Re-derives cards from the current outfit and catalog cache.
    pub fn product_cards(&self) -> Vec<ProductCard> {
        match &self.outfit {
            Some(outfit) => self.resolver.resolve(&outfit.outfit_suggestions),
            None => Vec::new(),
        }
    }

    /// Created once per session on first use, reused on every request after.
    fn session_id_or_init(&mut self) -> String {
        self.session_id
            .get_or_insert_with(|| {
                let id = format!("session_{}", Uuid::new_v4());
                debug!("created client session id {}", id);
                id
            })
            .clone()
    }

    // --- generation flow -------------------------------------------------

    /// Validates the prompt and enters Loading, handing back the request the
    /// caller should send. Rejected while a generation is already in flight.
    pub fn begin_submit(&mut self) -> Result<PendingRequest, ArmarioError> {
        if self.prompt.trim().is_empty() {
            return Err(ArmarioError::Validation("prompt required".to_string()));
        }
        if self.phase == SessionPhase::Loading {
            return Err(ArmarioError::Validation(
                "generation in progress".to_string(),
            ));
        }

        self.epoch += 1;
        self.phase = SessionPhase::Loading;

        let (price_min, price_max) = self.filters.price_bounds();
        let payload = GenerateOutfitRequest {
            prompt: self.prompt.clone(),
            gender: self.filters.gender(),
            session_id: Some(self.session_id_or_init()),
            categories: if self.filters.categories().is_empty() {
                None
            } else {
                Some(self.filters.categories().to_vec())
            },
            size_filters: if self.filters.size_filters().is_empty() {
                None
            } else {
                Some(self.filters.size_filters().clone())
            },
            price_min,
            price_max,
            locked_items: None,
        };

        info!("submitting outfit prompt ({} chars)", payload.prompt.len());
        Ok(PendingRequest {
            epoch: self.epoch,
            payload,
        })
    }

    /// Commits a finished generation: merges fetched details into the catalog
    /// cache, installs the new outfit, clears size selections. A stale
    /// completion (session reset or resubmitted since) is dropped untouched.
    pub fn complete(
        &mut self,
        pending: &PendingRequest,
        outfit: OutfitResponse,
        details: Vec<ItemDetail>,
    ) {
        if pending.epoch != self.epoch {
            debug!(
                "discarding stale outfit response (epoch {} behind {})",
                pending.epoch, self.epoch
            );
            return;
        }

        info!("outfit ready: {} suggestions", outfit.outfit_suggestions.len());
        self.resolver.merge_details(details);
        self.outfit = Some(outfit);
        self.selection.clear();
        self.phase = SessionPhase::Ready;
    }

    /// Records a failed generation: back to Idle, prior outfit results stay
    /// on screen. Stale failures are dropped like stale completions.
    pub fn fail(&mut self, pending: &PendingRequest, error: &ArmarioError) {
        if pending.epoch != self.epoch {
            debug!("discarding stale outfit failure: {}", error);
            return;
        }
        warn!("outfit generation failed: {}", error);
        self.phase = SessionPhase::Idle;
    }

    /// The full two-step flow: generate, then fetch details for every
    /// suggested item id.
    pub async fn generate(&mut self, api: &dyn OutfitApi) -> Result<(), ArmarioError> {
        let pending = self.begin_submit()?;

        let outfit = match api.generate_outfit(&pending.payload).await {
            Ok(outfit) => outfit,
            Err(e) => {
                self.fail(&pending, &e);
                return Err(e);
            }
        };

        let item_ids: Vec<String> = outfit
            .outfit_suggestions
            .iter()
            .map(|s| s.item_id.clone())
            .collect();
        let details = match api.fetch_items_by_ids(&item_ids).await {
            Ok(details) => details,
            Err(e) => {
                self.fail(&pending, &e);
                return Err(e);
            }
        };

        self.complete(&pending, outfit, details);
        Ok(())
    }

    /// Back to the main view from anywhere: clears prompt, gender, outfit and
    /// selections, and invalidates any in-flight generation. Cart, favorites,
    /// category/size filters and the catalog cache survive.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.phase = SessionPhase::Idle;
        self.prompt.clear();
        self.outfit = None;
        self.selection.clear();
        self.filters.set_gender(None);
        debug!("session reset");
    }

    // --- cart / favorites actions ----------------------------------------

    pub fn select_size(&mut self, item_id: &str, size: &str) {
        self.selection.select(item_id, size);
    }

    fn selected_size_for(&self, card: &ProductCard) -> Result<String, ArmarioError> {
        let size = self
            .selection
            .selected(&card.id)
            .ok_or_else(|| ArmarioError::Validation("size required".to_string()))?;
        if card.unavailable_sizes.iter().any(|s| s == size) {
            return Err(ArmarioError::Validation("size unavailable".to_string()));
        }
        Ok(size.to_string())
    }

    /// Adds the card at its selected size; merges into an existing line.
    pub fn add_to_cart(
        &mut self,
        card: &ProductCard,
        now: DateTime<Utc>,
    ) -> Result<(), ArmarioError> {
        let size = self.selected_size_for(card)?;
        self.cart.add(card, &size);
        self.feedback.flash_success(now);
        debug!("cart add: {} size {}", card.id, size);
        Ok(())
    }

    pub fn remove_from_cart(&mut self, item_id: &str, size: &str) {
        self.cart.remove(item_id, size);
    }

    pub fn update_quantity(&mut self, item_id: &str, size: &str, quantity: u32) {
        self.cart.set_quantity(item_id, size, quantity);
    }

    /// Likes the card at its selected size. Re-liking is a no-op and does not
    /// flash feedback again.
    pub fn add_to_liked(
        &mut self,
        card: &ProductCard,
        now: DateTime<Utc>,
    ) -> Result<(), ArmarioError> {
        let size = self.selected_size_for(card)?;
        let inserted = self.favorites.insert(FavoriteLine {
            item_id: card.id.clone(),
            name: card.name.clone(),
            price: card.price,
            size: size.clone(),
            photo_url: card.photo_url.clone(),
        });
        if !inserted {
            return Ok(());
        }
        self.feedback.mark_recently_liked(&card.id, now);
        self.feedback.flash_success(now);
        debug!("liked: {} size {}", card.id, size);
        Ok(())
    }

    pub fn remove_from_liked(&mut self, item_id: &str, size: &str) {
        self.favorites.remove(item_id, size);
    }

    pub fn is_liked(&self, item_id: &str, size: &str) -> bool {
        self.favorites.is_liked(item_id, size)
    }

    /// Cart line → favorites. The favorite is created from the line's
    /// snapshot unless already present; the cart side always empties.
    /// Quantity is intentionally not preserved across the move.
    pub fn move_to_liked(&mut self, line: &CartLine, now: DateTime<Utc>) {
        self.favorites.insert(FavoriteLine {
            item_id: line.item_id.clone(),
            name: line.name.clone(),
            price: line.price,
            size: line.size.clone(),
            photo_url: line.photo_url.clone(),
        });
        self.cart.remove(&line.item_id, &line.size);
        self.feedback.flash_success(now);
    }

    /// Favorite → cart, merging exactly like a manual add, then the favorite
    /// is unconditionally removed.
    pub fn move_to_cart(&mut self, favorite: &FavoriteLine, now: DateTime<Utc>) {
        self.cart.merge(
            &favorite.item_id,
            &favorite.name,
            favorite.price,
            &favorite.size,
            &favorite.photo_url,
        );
        self.favorites.remove(&favorite.item_id, &favorite.size);
        self.feedback.flash_success(now);
    }
}
