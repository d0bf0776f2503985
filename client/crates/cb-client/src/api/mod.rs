pub(crate) mod http_api;
pub(crate) mod recipe_api;
