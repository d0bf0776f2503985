use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Subscription tier of an account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    /// Monthly generation quota applies
    #[default]
    Free,
    Unlimited,
}

impl Plan {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Free => "free",
            Self::Unlimited => "unlimited",
        }
    }

    pub fn is_unlimited(&self) -> bool {
        *self == Self::Unlimited
    }
}

impl FromStr for Plan {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "free" => Ok(Self::Free),
            "unlimited" => Ok(Self::Unlimited),
            _ => Err(CoreError::InvalidPlan {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
