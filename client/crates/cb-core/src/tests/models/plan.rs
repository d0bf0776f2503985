use crate::Plan;

use std::str::FromStr;

#[test]
fn test_plan_as_str() {
    assert_eq!(Plan::Free.as_str(), "free");
    assert_eq!(Plan::Unlimited.as_str(), "unlimited");
}

#[test]
fn test_plan_from_str() {
    assert_eq!(Plan::from_str("free").unwrap(), Plan::Free);
    assert_eq!(Plan::from_str("unlimited").unwrap(), Plan::Unlimited);
    assert!(Plan::from_str("premium").is_err());
    assert!(Plan::from_str("Free").is_err());
}

#[test]
fn test_plan_default() {
    assert_eq!(Plan::default(), Plan::Free);
}

#[test]
fn test_plan_wire_format() {
    assert_eq!(
        serde_json::to_string(&Plan::Unlimited).unwrap(),
        "\"unlimited\""
    );
    let plan: Plan = serde_json::from_str("\"free\"").unwrap();
    assert_eq!(plan, Plan::Free);
}
