use crate::{CheckoutStatus, PaymentStatus};

use serde::{Deserialize, Serialize};

/// Body of `GET /payments/status/{session_id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentStatusReport {
    pub status: CheckoutStatus,
    pub payment_status: PaymentStatus,
    /// Major currency units (the backend converts from cents)
    #[serde(default)]
    pub amount_total: f64,
    #[serde(default)]
    pub currency: String,
}

impl PaymentStatusReport {
    pub fn is_paid(&self) -> bool {
        self.payment_status.is_paid()
    }

    pub fn is_expired(&self) -> bool {
        self.status.is_expired()
    }
}
