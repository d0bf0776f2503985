use crate::{ClientError, ClientResult, SessionManager};

use std::sync::Arc;

use cb_core::CheckoutSession;
use log::info;

/// Starts an upgrade to the unlimited plan.
pub struct Checkout {
    session: Arc<SessionManager>,
}

impl Checkout {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self { session }
    }

    /// Ask the backend for a payment provider checkout.
    ///
    /// `origin_url` is where the provider sends the user back to; the
    /// backend appends `/payment-success?session_id=...` to it. No request
    /// is made when nobody is signed in or the plan is already unlimited.
    pub async fn start(&self, origin_url: &str) -> ClientResult<CheckoutSession> {
        let (token, identity) = self
            .session
            .credentials()
            .ok_or_else(ClientError::not_authenticated)?;

        if identity.is_unlimited() {
            return Err(ClientError::already_unlimited());
        }

        let checkout = self
            .session
            .api()
            .create_checkout(&token, origin_url.trim_end_matches('/'))
            .await?;

        info!(
            "Checkout {} created for {}",
            checkout.session_id, identity.email
        );
        Ok(checkout)
    }
}
