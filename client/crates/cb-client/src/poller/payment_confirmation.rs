//! Payment confirmation state machine.
//!
//! ```text
//!            paid                    (refresh, then report)
//! Loading ─────────────────────────────────────────────▶ Success
//!    │ ▲
//!    │ └── pending, attempts < budget: wait one interval
//!    │
//!    └──── expired | attempts == budget | query failed ──▶ Error
//! ```
//!
//! The machine is pure: it is fed the outcome of each status query and
//! answers with the next [`Step`]. Issuing queries and waiting is the job
//! of [`PaymentPoller`](crate::PaymentPoller).

use crate::ClientError;

use std::time::Duration;

use cb_config::PollConfig;
use cb_core::PaymentStatusReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollState {
    Loading,
    Success,
    Error(PollFailure),
}

impl PollState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PollState::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollFailure {
    MissingSessionId,
    /// No signed-in user to query with
    NotAuthenticated,
    Expired,
    BudgetExhausted { attempts: u32 },
    Query(String),
}

impl PollFailure {
    /// Text to show the user. An exhausted budget reads the same as any
    /// other failure to confirm.
    pub fn user_message(&self) -> &'static str {
        match self {
            PollFailure::Expired => {
                "The payment session expired. Please start a new purchase."
            }
            PollFailure::NotAuthenticated => "Please sign in to confirm your payment.",
            _ => "We could not confirm your payment. Contact us if the problem persists.",
        }
    }
}

/// What the driver does after an observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Still pending; query again after this delay
    Wait(Duration),
    /// Paid; refresh the session before reporting success
    Confirmed,
    /// Terminal; issue nothing further
    Stop,
}

#[derive(Debug, Clone)]
pub struct PaymentConfirmation {
    session_id: Option<String>,
    state: PollState,
    /// Pending answers seen so far
    attempts: u32,
    queries: u32,
    max_attempts: u32,
    interval: Duration,
}

impl PaymentConfirmation {
    /// A blank or missing id lands directly in `Error(MissingSessionId)`.
    pub fn new(session_id: Option<&str>, config: &PollConfig) -> Self {
        let session_id = session_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_owned);

        let state = match session_id {
            Some(_) => PollState::Loading,
            None => PollState::Error(PollFailure::MissingSessionId),
        };

        Self {
            session_id,
            state,
            attempts: 0,
            queries: 0,
            max_attempts: config.max_attempts,
            interval: config.interval(),
        }
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Status queries observed, whatever their outcome
    pub fn queries(&self) -> u32 {
        self.queries
    }

    /// Pending answers observed
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// End polling without a query, e.g. when there is no token to send.
    /// Ignored once terminal.
    pub fn abort(&mut self, failure: PollFailure) {
        if !self.is_terminal() {
            self.state = PollState::Error(failure);
        }
    }

    /// Feed the outcome of one status query.
    ///
    /// Observations after a terminal state are ignored and answer `Stop`.
    pub fn observe(&mut self, outcome: Result<&PaymentStatusReport, &ClientError>) -> Step {
        if self.is_terminal() {
            return Step::Stop;
        }

        self.queries += 1;

        let report = match outcome {
            Ok(report) => report,
            Err(e) => {
                self.state = PollState::Error(PollFailure::Query(e.to_string()));
                return Step::Stop;
            }
        };

        if report.is_paid() {
            self.state = PollState::Success;
            return Step::Confirmed;
        }

        if report.is_expired() {
            self.state = PollState::Error(PollFailure::Expired);
            return Step::Stop;
        }

        self.attempts += 1;
        if self.attempts >= self.max_attempts {
            self.state = PollState::Error(PollFailure::BudgetExhausted {
                attempts: self.attempts,
            });
            return Step::Stop;
        }

        Step::Wait(self.interval)
    }
}
