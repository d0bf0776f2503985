
use crate::{ClientError, ClientResult, Clock, RecipeApi, SessionManager};

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use cb_core::{
    AuthSession, CheckoutSession, CheckoutStatus, Identity, PaymentStatus, PaymentStatusReport,
    Plan, Recipe, RecipeCategory,
};
use chrono::{TimeZone, Utc};
use tokio::sync::{Mutex as AsyncMutex, Notify, oneshot};
use uuid::Uuid;

pub(crate) const TOKEN: &str = "token-1";

pub(crate) fn identity(plan: Plan, used: u32) -> Identity {
    Identity {
        id: Uuid::from_u128(0x6f1c2a4e_8d3b_4c5a_9e7f_0a1b2c3d4e5f),
        email: String::from("chef@example.com"),
        name: String::from("Chef"),
        plan,
        recipes_generated_this_month: used,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 30).unwrap(),
    }
}

pub(crate) fn auth_session(token: &str, plan: Plan) -> AuthSession {
    AuthSession {
        token: token.to_string(),
        user: identity(plan, 0),
    }
}

pub(crate) fn pending() -> PaymentStatusReport {
    report(CheckoutStatus::Open, PaymentStatus::Unpaid)
}

pub(crate) fn paid() -> PaymentStatusReport {
    report(CheckoutStatus::Complete, PaymentStatus::Paid)
}

pub(crate) fn expired() -> PaymentStatusReport {
    report(CheckoutStatus::Expired, PaymentStatus::Unpaid)
}

pub(crate) fn recipe(title: &str) -> Recipe {
    Recipe {
        id: Uuid::from_u128(0x1b2c3d4e_5f60_4a7b_8c9d_0e1f2a3b4c5d),
        title: title.to_string(),
        description: String::from("Quick weeknight dinner"),
        ingredients: vec![String::from("200g pasta"), String::from("2 tomatoes")],
        instructions: vec![String::from("Boil the pasta."), String::from("Add the sauce.")],
        prep_time: String::from("10 min"),
        cook_time: String::from("15 min"),
        servings: 2,
        category: String::from("salato"),
        tips: None,
        substitutions: None,
        created_at: Utc.with_ymd_and_hms(2024, 3, 2, 19, 0, 0).unwrap(),
        user_id: identity(Plan::Free, 0).id,
    }
}

fn report(status: CheckoutStatus, payment_status: PaymentStatus) -> PaymentStatusReport {
    PaymentStatusReport {
        status,
        payment_status,
        amount_total: 2.99,
        currency: String::from("eur"),
    }
}

/// Backend double answering from scripted queues.
///
/// Empty queues answer with a network error so an unexpected call fails
/// loudly instead of hanging.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub(crate) logins: Mutex<VecDeque<ClientResult<AuthSession>>>,
    pub(crate) registrations: Mutex<VecDeque<ClientResult<AuthSession>>>,
    pub(crate) identities: Mutex<VecDeque<ClientResult<Identity>>>,
    pub(crate) checkouts: Mutex<VecDeque<ClientResult<CheckoutSession>>>,
    pub(crate) statuses: Mutex<VecDeque<ClientResult<PaymentStatusReport>>>,
    pub(crate) recipes: Mutex<VecDeque<ClientResult<Recipe>>>,
    pub(crate) current_user_calls: AtomicU32,
    pub(crate) checkout_calls: AtomicU32,
    pub(crate) status_calls: AtomicU32,
    pub(crate) status_tokens: Mutex<Vec<String>>,
    pub(crate) generated: Mutex<Vec<(Vec<String>, RecipeCategory, u32)>>,
}

impl FakeApi {
    pub(crate) fn with_login(self, result: ClientResult<AuthSession>) -> Self {
        self.logins.lock().unwrap().push_back(result);
        self
    }

    pub(crate) fn with_identity(self, result: ClientResult<Identity>) -> Self {
        self.identities.lock().unwrap().push_back(result);
        self
    }

    pub(crate) fn with_statuses(
        self,
        results: impl IntoIterator<Item = ClientResult<PaymentStatusReport>>,
    ) -> Self {
        self.statuses.lock().unwrap().extend(results);
        self
    }

    pub(crate) fn with_recipe(self, result: ClientResult<Recipe>) -> Self {
        self.recipes.lock().unwrap().push_back(result);
        self
    }

    pub(crate) fn generated(&self) -> Vec<(Vec<String>, RecipeCategory, u32)> {
        self.generated.lock().unwrap().clone()
    }

    pub(crate) fn current_user_calls(&self) -> u32 {
        self.current_user_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn status_calls(&self) -> u32 {
        self.status_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn checkout_calls(&self) -> u32 {
        self.checkout_calls.load(Ordering::SeqCst)
    }

    fn next<T>(queue: &Mutex<VecDeque<ClientResult<T>>>, what: &str) -> ClientResult<T> {
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::network(format!("no scripted {what}"))))
    }
}

#[async_trait]
impl RecipeApi for FakeApi {
    async fn login(&self, _email: &str, _password: &str) -> ClientResult<AuthSession> {
        Self::next(&self.logins, "login")
    }

    async fn register(
        &self,
        _email: &str,
        _password: &str,
        _name: &str,
    ) -> ClientResult<AuthSession> {
        Self::next(&self.registrations, "registration")
    }

    async fn current_user(&self, _token: &str) -> ClientResult<Identity> {
        self.current_user_calls.fetch_add(1, Ordering::SeqCst);
        Self::next(&self.identities, "identity")
    }

    async fn generate_recipe(
        &self,
        _token: &str,
        ingredients: &[String],
        category: RecipeCategory,
        servings: u32,
    ) -> ClientResult<Recipe> {
        self.generated
            .lock()
            .unwrap()
            .push((ingredients.to_vec(), category, servings));
        Self::next(&self.recipes, "recipe")
    }

    async fn create_checkout(
        &self,
        _token: &str,
        _origin_url: &str,
    ) -> ClientResult<CheckoutSession> {
        self.checkout_calls.fetch_add(1, Ordering::SeqCst);
        Self::next(&self.checkouts, "checkout")
    }

    async fn payment_status(
        &self,
        token: &str,
        _session_id: &str,
    ) -> ClientResult<PaymentStatusReport> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        self.status_tokens.lock().unwrap().push(token.to_string());
        Self::next(&self.statuses, "payment status")
    }
}

/// Holds `current_user` until the test releases it. Every status query
/// answers `paid`.
pub(crate) struct GatedApi {
    login: AuthSession,
    gate: AsyncMutex<Option<oneshot::Receiver<ClientResult<Identity>>>>,
    pub(crate) refresh_started: Notify,
}

#[async_trait]
impl RecipeApi for GatedApi {
    async fn login(&self, _email: &str, _password: &str) -> ClientResult<AuthSession> {
        Ok(self.login.clone())
    }

    async fn register(&self, _: &str, _: &str, _: &str) -> ClientResult<AuthSession> {
        Ok(self.login.clone())
    }

    async fn current_user(&self, _token: &str) -> ClientResult<Identity> {
        let rx = self.gate.lock().await.take().expect("single gated call");
        self.refresh_started.notify_one();
        rx.await.expect("gate released")
    }

    async fn generate_recipe(
        &self,
        _: &str,
        _: &[String],
        _: RecipeCategory,
        _: u32,
    ) -> ClientResult<Recipe> {
        Err(ClientError::network("unused"))
    }

    async fn create_checkout(&self, _: &str, _: &str) -> ClientResult<CheckoutSession> {
        Err(ClientError::network("unused"))
    }

    async fn payment_status(&self, _: &str, _: &str) -> ClientResult<PaymentStatusReport> {
        Ok(paid())
    }
}

pub(crate) fn gated() -> (
    Arc<GatedApi>,
    Arc<SessionManager>,
    oneshot::Sender<ClientResult<Identity>>,
) {
    let (tx, rx) = oneshot::channel();
    let api = Arc::new(GatedApi {
        login: auth_session(TOKEN, Plan::Free),
        gate: AsyncMutex::new(Some(rx)),
        refresh_started: Notify::new(),
    });
    (api.clone(), Arc::new(SessionManager::new(api)), tx)
}

/// Clock that returns immediately and remembers every requested delay
#[derive(Default)]
pub(crate) struct RecordingClock {
    pub(crate) sleeps: Mutex<Vec<Duration>>,
}

impl RecordingClock {
    pub(crate) fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Clock for RecordingClock {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}
