use serde::{Deserialize, Serialize};

/// Whether the provider has collected the money for a checkout session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Unpaid,
    NoPaymentRequired,
    /// Any value the provider adds later; treated as still pending
    #[serde(other)]
    Other,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Paid => "paid",
            Self::Unpaid => "unpaid",
            Self::NoPaymentRequired => "no_payment_required",
            Self::Other => "other",
        }
    }

    pub fn is_paid(&self) -> bool {
        *self == Self::Paid
    }
}
