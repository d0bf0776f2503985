pub mod auth_session;
pub mod checkout_session;
pub mod checkout_status;
pub mod identity;
pub mod payment_status;
pub mod payment_status_report;
pub mod plan;
pub mod recipe;
pub mod recipe_category;
pub mod requests;
pub mod usage_quota;
