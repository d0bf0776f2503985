pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::auth_session::AuthSession;
pub use models::checkout_session::CheckoutSession;
pub use models::checkout_status::CheckoutStatus;
pub use models::identity::Identity;
pub use models::payment_status::PaymentStatus;
pub use models::payment_status_report::PaymentStatusReport;
pub use models::plan::Plan;
pub use models::recipe::Recipe;
pub use models::recipe_category::RecipeCategory;
pub use models::requests::{
    CheckoutRequest, GenerateRecipeRequest, LoginRequest, RegisterRequest,
};
pub use models::usage_quota::{FREE_RECIPES_LIMIT, UsageQuota};
