use crate::{FREE_RECIPES_LIMIT, Plan, UsageQuota};

#[test]
fn test_free_quota_remaining() {
    let quota = UsageQuota::new(Plan::Free, 12);
    assert_eq!(quota.limit(), Some(FREE_RECIPES_LIMIT));
    assert_eq!(quota.remaining(), Some(38));
    assert!(!quota.is_exhausted());
}

#[test]
fn test_free_quota_exhausted_at_limit() {
    let quota = UsageQuota::new(Plan::Free, FREE_RECIPES_LIMIT);
    assert_eq!(quota.remaining(), Some(0));
    assert!(quota.is_exhausted());
    assert_eq!(quota.usage_percent(), 100.0);
}

#[test]
fn test_free_quota_over_limit_saturates() {
    let quota = UsageQuota::new(Plan::Free, FREE_RECIPES_LIMIT + 7);
    assert_eq!(quota.remaining(), Some(0));
    assert!(quota.is_exhausted());
    assert_eq!(quota.usage_percent(), 100.0);
}

#[test]
fn test_free_quota_percent() {
    let quota = UsageQuota::new(Plan::Free, 25);
    assert_eq!(quota.usage_percent(), 50.0);
}

#[test]
fn test_unlimited_quota_never_exhausts() {
    let quota = UsageQuota::new(Plan::Unlimited, 10_000);
    assert_eq!(quota.limit(), None);
    assert_eq!(quota.remaining(), None);
    assert!(!quota.is_exhausted());
    assert_eq!(quota.usage_percent(), 0.0);
}
