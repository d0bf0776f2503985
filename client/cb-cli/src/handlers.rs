use crate::commands::Commands;
use crate::error::Result as CliResult;

use std::path::PathBuf;
use std::sync::Arc;

use cb_client::{
    Checkout, ClientError, PaymentPoller, PollState, RecipeApi, RecipeGenerator, SessionManager,
    session_id_from_return_url,
};
use cb_config::{PollConfig, SessionFile};
use cb_core::{Identity, RecipeCategory, UsageQuota};
use log::{info, warn};
use serde_json::{Value, json};

/// Runs one command against the backend.
///
/// The saved session lives in `config_dir`; every command that needs a
/// signed-in user resumes it first.
pub(crate) struct Handlers {
    session: Arc<SessionManager>,
    poll: PollConfig,
    config_dir: PathBuf,
}

impl Handlers {
    pub(crate) fn new(api: Arc<dyn RecipeApi>, poll: PollConfig, config_dir: PathBuf) -> Self {
        Self {
            session: Arc::new(SessionManager::new(api)),
            poll,
            config_dir,
        }
    }

    pub(crate) async fn run(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Login { email, password } => {
                let identity = self.session.login(&email, &password).await?;
                self.save_session(&identity)
            }
            Commands::Register {
                email,
                password,
                name,
            } => {
                let identity = self.session.register(&email, &password, &name).await?;
                self.save_session(&identity)
            }
            Commands::Logout => self.logout(),
            Commands::Whoami => self.whoami().await,
            Commands::Generate {
                ingredients,
                category,
                servings,
            } => self.generate(&ingredients, category, servings).await,
            Commands::Checkout { origin_url } => self.checkout(&origin_url).await,
            Commands::Confirm {
                session_id,
                return_url,
            } => {
                let session_id =
                    session_id.or_else(|| return_url.as_deref().and_then(session_id_from_return_url));
                self.confirm(session_id.as_deref()).await
            }
        }
    }

    fn save_session(&self, identity: &Identity) -> CliResult<Value> {
        let token = self
            .session
            .token()
            .ok_or_else(ClientError::not_authenticated)?;
        let path = SessionFile::new(token, identity.email.as_str()).write_to(&self.config_dir)?;

        Ok(json!({
            "user": identity,
            "session_file": path.display().to_string(),
        }))
    }

    fn logout(&self) -> CliResult<Value> {
        self.session.logout();
        let removed = SessionFile::remove_from(&self.config_dir)?;
        if removed {
            info!("Saved session removed");
        }

        Ok(json!({ "logged_out": removed }))
    }

    async fn whoami(&self) -> CliResult<Value> {
        let identity = self.resume().await?;
        let usage = identity.usage();

        Ok(json!({
            "user": identity,
            "usage": usage_json(&usage),
            "can_generate": self.session.can_generate(),
        }))
    }

    async fn generate(
        &self,
        ingredients: &[String],
        category: RecipeCategory,
        servings: u32,
    ) -> CliResult<Value> {
        self.resume().await?;

        let recipe = RecipeGenerator::new(self.session.clone())
            .generate(ingredients, category, servings)
            .await?;

        Ok(json!({
            "recipe": recipe,
            "usage": self.session.usage().as_ref().map(usage_json),
        }))
    }

    async fn checkout(&self, origin_url: &str) -> CliResult<Value> {
        self.resume().await?;

        let checkout = Checkout::new(self.session.clone()).start(origin_url).await?;

        Ok(json!({
            "url": checkout.url,
            "session_id": checkout.session_id,
        }))
    }

    async fn confirm(&self, session_id: Option<&str>) -> CliResult<Value> {
        self.resume().await?;

        let poller = PaymentPoller::new(self.session.clone(), self.poll.clone());
        let result = poller.confirm(session_id).await;

        if let PollState::Error(failure) = &*poller.subscribe().borrow() {
            eprintln!("{}", failure.user_message());
        }

        let confirmation = result?;

        Ok(json!({
            "session_id": confirmation.session_id,
            "state": "success",
            "queries": confirmation.queries,
            "plan": confirmation.identity.map(|identity| identity.plan.as_str().to_string()),
        }))
    }

    /// Restore the saved login. A token the backend rejects is deleted.
    async fn resume(&self) -> CliResult<Identity> {
        let saved = SessionFile::read_from(&self.config_dir)?
            .ok_or_else(ClientError::not_authenticated)?;

        match self.session.resume(&saved.token).await {
            Ok(identity) => Ok(identity),
            Err(e) if e.is_auth() => {
                SessionFile::remove_from(&self.config_dir)?;
                warn!("Saved session for {} is no longer valid", saved.email);
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn usage_json(usage: &UsageQuota) -> Value {
    json!({
        "used": usage.used,
        "limit": usage.limit(),
        "remaining": usage.remaining(),
        "percent": usage.usage_percent(),
    })
}
