use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Kind of dish the backend is asked for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RecipeCategory {
    #[default]
    #[serde(rename = "salato")]
    Savory,
    #[serde(rename = "dolce")]
    Sweet,
    /// Ready in at most 20 minutes
    #[serde(rename = "veloce")]
    Quick,
}

impl RecipeCategory {
    /// Wire name
    pub fn as_str(&self) -> &str {
        match self {
            Self::Savory => "salato",
            Self::Sweet => "dolce",
            Self::Quick => "veloce",
        }
    }
}

impl FromStr for RecipeCategory {
    type Err = CoreError;

    /// Accepts the wire name or the English variant name, case-insensitively.
    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_lowercase().as_str() {
            "salato" | "savory" => Ok(Self::Savory),
            "dolce" | "sweet" => Ok(Self::Sweet),
            "veloce" | "quick" => Ok(Self::Quick),
            _ => Err(CoreError::InvalidCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for RecipeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
