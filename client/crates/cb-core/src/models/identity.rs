//! Identity - the signed-in account as the backend last reported it.

use crate::{Plan, UsageQuota};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile, plan and monthly usage of the authenticated user.
///
/// Always replaced as a whole; fields are never patched individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub plan: Plan,
    /// Reset by the backend at the start of each calendar month
    #[serde(default)]
    pub recipes_generated_this_month: u32,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    pub fn is_unlimited(&self) -> bool {
        self.plan.is_unlimited()
    }

    /// Quota view derived from plan and monthly counter
    pub fn usage(&self) -> UsageQuota {
        UsageQuota::new(self.plan, self.recipes_generated_this_month)
    }
}
