use crate::ClientResult;

use async_trait::async_trait;
use cb_core::{
    AuthSession, CheckoutSession, Identity, PaymentStatusReport, Recipe, RecipeCategory,
};

/// The backend calls the session and payment flows depend on.
///
/// `HttpApi` talks to the real backend; tests substitute scripted fakes.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, email: &str, password: &str) -> ClientResult<AuthSession>;

    /// `POST /auth/register`
    async fn register(&self, email: &str, password: &str, name: &str)
    -> ClientResult<AuthSession>;

    /// `GET /auth/me`
    async fn current_user(&self, token: &str) -> ClientResult<Identity>;

    /// `POST /recipes/generate`. The backend answers 403 once the monthly
    /// quota is used up and increments the counter on success.
    async fn generate_recipe(
        &self,
        token: &str,
        ingredients: &[String],
        category: RecipeCategory,
        servings: u32,
    ) -> ClientResult<Recipe>;

    /// `POST /payments/checkout`
    async fn create_checkout(&self, token: &str, origin_url: &str)
    -> ClientResult<CheckoutSession>;

    /// `GET /payments/status/{session_id}`; requires a signed-in user
    async fn payment_status(
        &self,
        token: &str,
        session_id: &str,
    ) -> ClientResult<PaymentStatusReport>;
}
