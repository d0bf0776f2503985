use crate::Plan;

/// Monthly generations allowed on the free plan.
pub const FREE_RECIPES_LIMIT: u32 = 50;

/// Client-side view of the monthly generation quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageQuota {
    pub plan: Plan,
    pub used: u32,
}

impl UsageQuota {
    pub fn new(plan: Plan, used: u32) -> Self {
        Self { plan, used }
    }

    /// `None` when the plan has no limit
    pub fn limit(&self) -> Option<u32> {
        match self.plan {
            Plan::Free => Some(FREE_RECIPES_LIMIT),
            Plan::Unlimited => None,
        }
    }

    /// Generations left this month, `None` when unlimited.
    pub fn remaining(&self) -> Option<u32> {
        self.limit().map(|limit| limit.saturating_sub(self.used))
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == Some(0)
    }

    /// Share of the quota consumed, 0-100. Always 0 when unlimited.
    pub fn usage_percent(&self) -> f64 {
        match self.limit() {
            Some(limit) => (f64::from(self.used) / f64::from(limit) * 100.0).min(100.0),
            None => 0.0,
        }
    }
}
