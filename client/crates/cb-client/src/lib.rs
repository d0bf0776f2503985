//! Client-side session and payment confirmation for the Chef Buddy backend.
//!
//! [`SessionManager`] owns the signed-in identity and its bearer token.
//! [`RecipeGenerator`] spends the monthly quota and re-reads it afterwards.
//! [`PaymentPoller`] confirms a checkout after the payment provider
//! redirects back, then refreshes the session so the new plan is visible.

pub(crate) mod api;
pub(crate) mod checkout;
pub(crate) mod clock;
pub(crate) mod error;
pub(crate) mod generator;
pub(crate) mod poller;
pub(crate) mod session_manager;

#[cfg(test)]
mod tests;

pub use api::{http_api::HttpApi, recipe_api::RecipeApi};
pub use checkout::Checkout;
pub use clock::{Clock, TokioClock};
pub use error::{ClientError, Result as ClientResult};
pub use generator::{MIN_INGREDIENTS, RecipeGenerator};
pub use poller::{
    payment_confirmation::{PaymentConfirmation, PollFailure, PollState, Step},
    payment_poller::{Confirmation, PaymentPoller},
    return_url::session_id_from_return_url,
};
pub use session_manager::SessionManager;
