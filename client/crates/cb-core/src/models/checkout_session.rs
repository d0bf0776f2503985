use serde::{Deserialize, Serialize};

/// Provider checkout created by `POST /payments/checkout`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Redirect target on the payment provider
    pub url: String,
    pub session_id: String,
}
