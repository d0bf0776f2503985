use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors surfaced by the session, checkout and payment confirmation flows
#[derive(Error, Debug)]
pub enum ClientError {
    /// Bad credentials or an expired session; the user must sign in again
    #[error("Authentication failed: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },

    /// The request never produced an HTTP response
    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid backend URL {url} {location}")]
    InvalidUrl {
        url: String,
        location: ErrorLocation,
    },

    #[error("Not logged in {location}")]
    NotAuthenticated { location: ErrorLocation },

    #[error("Session changed while the request was in flight {location}")]
    SessionChanged { location: ErrorLocation },

    #[error("Account is already on the unlimited plan {location}")]
    AlreadyUnlimited { location: ErrorLocation },

    /// Free plan used up for this month; nothing was sent
    #[error("Monthly limit of {limit} recipes reached {location}")]
    QuotaExhausted { limit: u32, location: ErrorLocation },

    #[error("At least {required} ingredients are needed, got {count} {location}")]
    TooFewIngredients {
        count: usize,
        required: usize,
        location: ErrorLocation,
    },

    #[error("No payment session id supplied {location}")]
    MissingSessionId { location: ErrorLocation },

    #[error("Payment session {session_id} expired {location}")]
    PaymentExpired {
        session_id: String,
        location: ErrorLocation,
    },

    #[error("Payment not confirmed after {attempts} attempts {location}")]
    PollBudgetExhausted {
        attempts: u32,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Network {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: Some(err),
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Transport failure without an underlying reqwest error
    #[track_caller]
    pub fn network(message: impl Into<String>) -> Self {
        ClientError::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source: None,
        }
    }

    #[track_caller]
    pub fn auth(message: impl Into<String>) -> Self {
        ClientError::Auth {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        ClientError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_url(url: impl Into<String>) -> Self {
        ClientError::InvalidUrl {
            url: url.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_authenticated() -> Self {
        ClientError::NotAuthenticated {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn session_changed() -> Self {
        ClientError::SessionChanged {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn already_unlimited() -> Self {
        ClientError::AlreadyUnlimited {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn quota_exhausted(limit: u32) -> Self {
        ClientError::QuotaExhausted {
            limit,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn too_few_ingredients(count: usize, required: usize) -> Self {
        ClientError::TooFewIngredients {
            count,
            required,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_session_id() -> Self {
        ClientError::MissingSessionId {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn payment_expired(session_id: impl Into<String>) -> Self {
        ClientError::PaymentExpired {
            session_id: session_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn poll_budget_exhausted(attempts: u32) -> Self {
        ClientError::PollBudgetExhausted {
            attempts,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, ClientError::Auth { .. })
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network { .. })
    }

    /// Backend-provided message, verbatim, where there is one
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ClientError::Auth { message, .. } | ClientError::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
