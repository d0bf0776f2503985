mod identity;
mod payment_status;
mod plan;
mod recipe;
mod usage_quota;
