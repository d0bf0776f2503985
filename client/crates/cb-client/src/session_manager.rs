use crate::{ClientError, ClientResult, RecipeApi};

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use cb_core::{AuthSession, Identity, UsageQuota};
use log::{debug, info, warn};

/// Token and identity from the same backend response.
#[derive(Clone)]
struct AuthState {
    token: String,
    identity: Identity,
}

struct SessionStore {
    /// Bumped whenever the token changes (login, register, resume, logout,
    /// forced sign-out). Identity refreshes keep it.
    epoch: u64,
    state: Option<AuthState>,
}

/// Single owner of the signed-in identity and its bearer token.
///
/// Every write replaces the whole record under one lock, and the lock is
/// never held across an `.await`. A refresh that started under an older
/// epoch is discarded instead of applied, so a response arriving after
/// `logout()` cannot bring stale credentials back. Refreshes within one
/// epoch are last-write-wins.
pub struct SessionManager {
    api: Arc<dyn RecipeApi>,
    store: RwLock<SessionStore>,
}

impl SessionManager {
    pub fn new(api: Arc<dyn RecipeApi>) -> Self {
        Self {
            api,
            store: RwLock::new(SessionStore {
                epoch: 0,
                state: None,
            }),
        }
    }

    pub(crate) fn api(&self) -> &Arc<dyn RecipeApi> {
        &self.api
    }

    /// Sign in with email and password.
    ///
    /// Bad credentials surface as `ClientError::Auth` carrying the backend's
    /// message. The stored session is left untouched on failure.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Identity> {
        let session = self.api.login(email, password).await.inspect_err(|e| {
            warn!("Login failed for {}: {}", email, e);
        })?;

        Ok(self.adopt(session, "Logged in"))
    }

    /// Create an account and sign in to it.
    pub async fn register(&self, email: &str, password: &str, name: &str) -> ClientResult<Identity> {
        let session = self
            .api
            .register(email, password, name)
            .await
            .inspect_err(|e| {
                warn!("Registration failed for {}: {}", email, e);
            })?;

        Ok(self.adopt(session, "Registered"))
    }

    /// Adopt a token saved by an earlier process.
    ///
    /// The identity is fetched before anything is stored, so the session is
    /// either fully resumed or stays anonymous.
    pub async fn resume(&self, token: &str) -> ClientResult<Identity> {
        let epoch = self.read().epoch;

        let identity = self.api.current_user(token).await.inspect_err(|e| {
            warn!("Could not resume saved session: {}", e);
        })?;

        let mut store = self.write();
        if store.epoch != epoch {
            debug!("Discarding resumed session: session changed meanwhile");
            return Err(ClientError::session_changed());
        }

        store.epoch += 1;
        store.state = Some(AuthState {
            token: token.to_string(),
            identity: identity.clone(),
        });
        info!("Resumed session for {}", identity.email);

        Ok(identity)
    }

    /// Re-fetch the identity with the current token.
    ///
    /// On success the stored identity is replaced as a whole. On an
    /// authentication failure the session is cleared. Transport and other
    /// failures leave it as it was.
    pub async fn refresh_user(&self) -> ClientResult<Identity> {
        let (epoch, token) = {
            let store = self.read();
            match &store.state {
                Some(state) => (store.epoch, state.token.clone()),
                None => return Err(ClientError::not_authenticated()),
            }
        };

        match self.api.current_user(&token).await {
            Ok(identity) => {
                let mut store = self.write();
                if store.epoch != epoch {
                    debug!("Discarding refreshed identity: session changed meanwhile");
                    return Err(ClientError::session_changed());
                }

                store.state = Some(AuthState {
                    token,
                    identity: identity.clone(),
                });
                debug!(
                    "Refreshed identity for {} (plan: {}, used: {})",
                    identity.email, identity.plan, identity.recipes_generated_this_month
                );

                Ok(identity)
            }
            Err(e) if e.is_auth() => {
                let mut store = self.write();
                if store.epoch == epoch {
                    store.epoch += 1;
                    store.state = None;
                    warn!("Session rejected by backend, signed out: {}", e);
                }
                Err(e)
            }
            Err(e) => {
                warn!("Refreshing identity failed: {}", e);
                Err(e)
            }
        }
    }

    /// Forget identity and token. Takes effect before this call returns.
    ///
    /// Returns whether a session was active.
    pub fn logout(&self) -> bool {
        let mut store = self.write();
        store.epoch += 1;
        let was_active = store.state.take().is_some();

        if was_active {
            info!("Logged out");
        }

        was_active
    }

    pub fn identity(&self) -> Option<Identity> {
        self.read().state.as_ref().map(|s| s.identity.clone())
    }

    /// Bearer token to attach to outbound requests
    pub fn token(&self) -> Option<String> {
        self.read().state.as_ref().map(|s| s.token.clone())
    }

    /// Token and identity read together under one lock
    pub(crate) fn credentials(&self) -> Option<(String, Identity)> {
        self.read()
            .state
            .as_ref()
            .map(|s| (s.token.clone(), s.identity.clone()))
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().state.is_some()
    }

    pub fn usage(&self) -> Option<UsageQuota> {
        self.read().state.as_ref().map(|s| s.identity.usage())
    }

    /// Whether the signed-in account may generate another recipe this month
    pub fn can_generate(&self) -> bool {
        self.usage().is_some_and(|quota| !quota.is_exhausted())
    }

    fn adopt(&self, session: AuthSession, action: &str) -> Identity {
        let identity = session.user.clone();

        let mut store = self.write();
        store.epoch += 1;
        store.state = Some(AuthState {
            token: session.token,
            identity: session.user,
        });

        info!("{} as {} (plan: {})", action, identity.email, identity.plan);
        identity
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}
