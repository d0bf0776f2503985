use crate::{ClientError, ClientResult, SessionManager};

use std::sync::Arc;

use cb_core::{Recipe, RecipeCategory};
use log::{info, warn};
use reqwest::StatusCode;

/// Fewest distinct ingredients a generation request may carry
pub const MIN_INGREDIENTS: usize = 2;

/// Generates recipes for the signed-in user and keeps the usage counter in
/// step with the backend.
pub struct RecipeGenerator {
    session: Arc<SessionManager>,
}

impl RecipeGenerator {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self { session }
    }

    /// Ask the backend for a recipe.
    ///
    /// Ingredients are trimmed, lowercased and de-duplicated first. Nothing
    /// is sent when fewer than [`MIN_INGREDIENTS`] remain, nobody is signed
    /// in, or the free quota is already used up. The backend's own quota
    /// refusal (403) is returned with its message verbatim.
    ///
    /// After a generation, or a 403, the identity is refreshed so
    /// `usage()` reflects the backend's counter. A failed refresh is only
    /// logged.
    pub async fn generate(
        &self,
        ingredients: &[String],
        category: RecipeCategory,
        servings: u32,
    ) -> ClientResult<Recipe> {
        let ingredients = normalize_ingredients(ingredients);
        if ingredients.len() < MIN_INGREDIENTS {
            return Err(ClientError::too_few_ingredients(
                ingredients.len(),
                MIN_INGREDIENTS,
            ));
        }

        let (token, identity) = self
            .session
            .credentials()
            .ok_or_else(ClientError::not_authenticated)?;

        let quota = identity.usage();
        if let Some(limit) = quota.limit()
            && quota.is_exhausted()
        {
            return Err(ClientError::quota_exhausted(limit));
        }

        let result = self
            .session
            .api()
            .generate_recipe(&token, &ingredients, category, servings)
            .await;

        let reconcile = match &result {
            Ok(recipe) => {
                info!(
                    "Generated '{}' ({}, {} servings)",
                    recipe.title, category, servings
                );
                true
            }
            Err(ClientError::Api { status, .. }) if *status == StatusCode::FORBIDDEN.as_u16() => {
                warn!("Generation refused for {}: monthly quota reached", identity.email);
                true
            }
            Err(e) => {
                warn!("Recipe generation failed: {}", e);
                false
            }
        };

        if reconcile && let Err(e) = self.session.refresh_user().await {
            warn!("Usage refresh after generation failed: {}", e);
        }

        result
    }
}

/// Trimmed, lowercased, non-empty and unique, in first-seen order
pub(crate) fn normalize_ingredients(ingredients: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(ingredients.len());

    for ingredient in ingredients {
        let ingredient = ingredient.trim().to_lowercase();
        if !ingredient.is_empty() && !normalized.contains(&ingredient) {
            normalized.push(ingredient);
        }
    }

    normalized
}
