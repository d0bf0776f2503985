use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid plan: {value} {location}")]
    InvalidPlan {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid recipe category: {value} {location}")]
    InvalidCategory {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
