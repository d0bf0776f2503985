pub(crate) mod payment_confirmation;
pub(crate) mod payment_poller;
pub(crate) mod return_url;
