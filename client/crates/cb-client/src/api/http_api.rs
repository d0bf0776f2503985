use crate::{ClientError, ClientResult, RecipeApi};

use async_trait::async_trait;
use cb_config::ApiConfig;
use cb_core::{
    AuthSession, CheckoutRequest, CheckoutSession, GenerateRecipeRequest, Identity, LoginRequest,
    PaymentStatusReport, Recipe, RecipeCategory, RegisterRequest,
};
use reqwest::{Client as ReqwestClient, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

const API_PREFIX: &str = "api";

/// HTTP client for the recipe backend REST API
pub struct HttpApi {
    base_url: String,
    client: ReqwestClient,
}

impl HttpApi {
    /// Create a new client without a request timeout
    ///
    /// # Arguments
    /// * `base_url` - Backend origin (e.g., "http://127.0.0.1:8001")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client from configuration, applying the request timeout
    pub fn from_config(config: &ApiConfig) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base_url}/api/{segments...}`. Each segment is percent-encoded on
    /// its own, so a `/`, `?` or `#` inside one cannot change the endpoint.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|_| ClientError::invalid_url(&self.base_url))?;

        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_url(&self.base_url))?
            .pop_if_empty()
            .push(API_PREFIX)
            .extend(segments);

        Ok(url)
    }

    /// Build a request with an optional bearer token
    fn request(
        &self,
        method: Method,
        segments: &[&str],
        token: Option<&str>,
    ) -> ClientResult<reqwest::RequestBuilder> {
        let req = self.client.request(method, self.endpoint(segments)?);

        Ok(match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        })
    }

    /// Execute request and map non-success statuses to errors
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        let message = Self::error_detail(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

        log::debug!("Backend rejected request with {}: {}", status, message);

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::auth(message));
        }

        Err(ClientError::api(status.as_u16(), message))
    }

    /// Extract the `detail` field of an error body.
    ///
    /// Handled errors carry a string; request validation failures carry a
    /// list of objects with a `msg` field.
    pub(crate) fn error_detail(body: &[u8]) -> Option<String> {
        let value: Value = serde_json::from_slice(body).ok()?;

        match value.get("detail")? {
            Value::String(detail) => Some(detail.clone()),
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if messages.is_empty() {
                    None
                } else {
                    Some(messages.join("; "))
                }
            }
            _ => None,
        }
    }
}

#[async_trait]
impl RecipeApi for HttpApi {
    async fn login(&self, email: &str, password: &str) -> ClientResult<AuthSession> {
        let body = LoginRequest { email, password };
        let req = self
            .request(Method::POST, &["auth", "login"], None)?
            .json(&body);
        self.execute(req).await
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> ClientResult<AuthSession> {
        let body = RegisterRequest {
            email,
            password,
            name,
        };
        let req = self
            .request(Method::POST, &["auth", "register"], None)?
            .json(&body);
        self.execute(req).await
    }

    async fn current_user(&self, token: &str) -> ClientResult<Identity> {
        let req = self.request(Method::GET, &["auth", "me"], Some(token))?;
        self.execute(req).await
    }

    async fn generate_recipe(
        &self,
        token: &str,
        ingredients: &[String],
        category: RecipeCategory,
        servings: u32,
    ) -> ClientResult<Recipe> {
        let body = GenerateRecipeRequest {
            ingredients,
            category,
            servings,
        };
        let req = self
            .request(Method::POST, &["recipes", "generate"], Some(token))?
            .json(&body);
        self.execute(req).await
    }

    async fn create_checkout(
        &self,
        token: &str,
        origin_url: &str,
    ) -> ClientResult<CheckoutSession> {
        let body = CheckoutRequest { origin_url };
        let req = self
            .request(Method::POST, &["payments", "checkout"], Some(token))?
            .json(&body);
        self.execute(req).await
    }

    async fn payment_status(
        &self,
        token: &str,
        session_id: &str,
    ) -> ClientResult<PaymentStatusReport> {
        let req = self.request(
            Method::GET,
            &["payments", "status", session_id],
            Some(token),
        )?;
        self.execute(req).await
    }
}
