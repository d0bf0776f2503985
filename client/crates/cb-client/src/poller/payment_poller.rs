use crate::{
    ClientError, ClientResult, Clock, PaymentConfirmation, PollFailure, PollState, SessionManager,
    Step, TokioClock,
};

use std::sync::Arc;

use cb_config::PollConfig;
use cb_core::Identity;
use log::{debug, info, warn};
use tokio::sync::watch;

/// Result of a confirmed payment
#[derive(Debug, Clone)]
pub struct Confirmation {
    pub session_id: String,
    /// Status queries issued, including the one that saw `paid`
    pub queries: u32,
    /// Identity after the post-payment refresh; `None` if that refresh
    /// failed (the payment still stands)
    pub identity: Option<Identity>,
}

/// Drives a [`PaymentConfirmation`] against the backend.
///
/// One query is in flight at a time and the next is only scheduled after
/// the previous one resolved. Dropping the future returned by
/// [`confirm`](Self::confirm) abandons polling.
pub struct PaymentPoller {
    session: Arc<SessionManager>,
    clock: Arc<dyn Clock>,
    config: PollConfig,
    state_tx: watch::Sender<PollState>,
}

impl PaymentPoller {
    pub fn new(session: Arc<SessionManager>, config: PollConfig) -> Self {
        Self::with_clock(session, Arc::new(TokioClock), config)
    }

    pub fn with_clock(
        session: Arc<SessionManager>,
        clock: Arc<dyn Clock>,
        config: PollConfig,
    ) -> Self {
        let (state_tx, _) = watch::channel(PollState::Loading);
        Self {
            session,
            clock,
            config,
            state_tx,
        }
    }

    /// Observe state changes. `Success` is only published once the
    /// post-payment refresh has resolved.
    pub fn subscribe(&self) -> watch::Receiver<PollState> {
        self.state_tx.subscribe()
    }

    /// Poll until the payment is confirmed or a terminal failure occurs.
    ///
    /// Only "still pending" answers are retried. Expiry, an exhausted
    /// budget and any failed query end polling immediately. Status queries
    /// need a signed-in user; without one polling stops with
    /// `NotAuthenticated` before anything is sent.
    pub async fn confirm(&self, session_id: Option<&str>) -> ClientResult<Confirmation> {
        let mut machine = PaymentConfirmation::new(session_id, &self.config);

        let Some(session_id) = machine.session_id().map(str::to_owned) else {
            warn!("Payment confirmation started without a session id");
            self.publish(machine.state().clone());
            return Err(ClientError::missing_session_id());
        };

        self.publish(PollState::Loading);
        info!("Confirming payment session {}", session_id);

        loop {
            let Some(token) = self.session.token() else {
                machine.abort(PollFailure::NotAuthenticated);
                self.publish(machine.state().clone());
                warn!("Payment {} not confirmed: nobody is signed in", session_id);
                return Err(ClientError::not_authenticated());
            };

            let result = self
                .session
                .api()
                .payment_status(&token, &session_id)
                .await;

            if let Ok(report) = &result {
                debug!(
                    "Payment {} status: {} / {}",
                    session_id,
                    report.status.as_str(),
                    report.payment_status.as_str()
                );
            }

            match machine.observe(result.as_ref()) {
                Step::Wait(delay) => {
                    debug!(
                        "Payment {} pending (attempt {}/{}), retrying in {:?}",
                        session_id,
                        machine.attempts(),
                        self.config.max_attempts,
                        delay
                    );
                    self.clock.sleep(delay).await;
                }
                Step::Confirmed => {
                    let identity = match self.session.refresh_user().await {
                        Ok(identity) => Some(identity),
                        Err(e) => {
                            warn!("Payment {} confirmed but refresh failed: {}", session_id, e);
                            None
                        }
                    };

                    self.publish(PollState::Success);
                    info!(
                        "Payment {} confirmed after {} queries",
                        session_id,
                        machine.queries()
                    );

                    return Ok(Confirmation {
                        session_id,
                        queries: machine.queries(),
                        identity,
                    });
                }
                Step::Stop => {
                    self.publish(machine.state().clone());
                    warn!(
                        "Payment {} not confirmed after {} queries: {:?}",
                        session_id,
                        machine.queries(),
                        machine.state()
                    );

                    return Err(match result {
                        Err(e) => e,
                        Ok(_) => Self::terminal_error(machine.state(), &session_id),
                    });
                }
            }
        }
    }

    fn terminal_error(state: &PollState, session_id: &str) -> ClientError {
        match state {
            PollState::Error(PollFailure::Expired) => ClientError::payment_expired(session_id),
            PollState::Error(PollFailure::BudgetExhausted { attempts }) => {
                ClientError::poll_budget_exhausted(*attempts)
            }
            PollState::Error(PollFailure::MissingSessionId) => ClientError::missing_session_id(),
            PollState::Error(PollFailure::NotAuthenticated) => ClientError::not_authenticated(),
            other => ClientError::network(format!("payment polling stopped in {other:?}")),
        }
    }

    fn publish(&self, state: PollState) {
        self.state_tx.send_replace(state);
    }
}
