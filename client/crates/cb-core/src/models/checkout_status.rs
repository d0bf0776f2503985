use serde::{Deserialize, Serialize};

/// Lifecycle of a provider checkout session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStatus {
    Open,
    Complete,
    Expired,
    #[serde(other)]
    Other,
}

impl CheckoutStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Complete => "complete",
            Self::Expired => "expired",
            Self::Other => "other",
        }
    }

    pub fn is_expired(&self) -> bool {
        *self == Self::Expired
    }
}
