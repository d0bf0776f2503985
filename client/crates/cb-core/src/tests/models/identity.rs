use crate::{AuthSession, Identity, Plan};

#[test]
fn test_identity_from_backend_body() {
    let identity: Identity = serde_json::from_str(
        r#"{
            "id": "6f1c2a4e-8d3b-4c5a-9e7f-0a1b2c3d4e5f",
            "email": "chef@example.com",
            "name": "Chef",
            "plan": "unlimited",
            "recipes_generated_this_month": 12,
            "created_at": "2024-03-01T10:15:30.123456+00:00"
        }"#,
    )
    .unwrap();

    assert_eq!(identity.email, "chef@example.com");
    assert_eq!(identity.plan, Plan::Unlimited);
    assert_eq!(identity.recipes_generated_this_month, 12);
    assert!(identity.is_unlimited());
}

#[test]
fn test_identity_missing_plan_defaults_to_free() {
    let identity: Identity = serde_json::from_str(
        r#"{
            "id": "6f1c2a4e-8d3b-4c5a-9e7f-0a1b2c3d4e5f",
            "email": "chef@example.com",
            "name": "Chef",
            "created_at": "2024-03-01T10:15:30+00:00"
        }"#,
    )
    .unwrap();

    assert_eq!(identity.plan, Plan::Free);
    assert_eq!(identity.recipes_generated_this_month, 0);
    assert_eq!(identity.usage().remaining(), Some(50));
}

#[test]
fn test_identity_rejects_unknown_plan() {
    let result: Result<Identity, _> = serde_json::from_str(
        r#"{
            "id": "6f1c2a4e-8d3b-4c5a-9e7f-0a1b2c3d4e5f",
            "email": "chef@example.com",
            "name": "Chef",
            "plan": "gold",
            "created_at": "2024-03-01T10:15:30+00:00"
        }"#,
    );

    assert!(result.is_err());
}

#[test]
fn test_auth_session_debug_redacts_token() {
    let session: AuthSession = serde_json::from_str(
        r#"{
            "token": "secret-jwt",
            "user": {
                "id": "6f1c2a4e-8d3b-4c5a-9e7f-0a1b2c3d4e5f",
                "email": "chef@example.com",
                "name": "Chef",
                "plan": "free",
                "recipes_generated_this_month": 0,
                "created_at": "2024-03-01T10:15:30+00:00"
            }
        }"#,
    )
    .unwrap();

    let debug = format!("{session:?}");
    assert!(!debug.contains("secret-jwt"));
    assert!(debug.contains("chef@example.com"));
}
