//! Per-test fixture provisioning and the persisted authentication artifact
//!
//! Every test gets its own [`TestContext`] with a fresh WebDriver session,
//! so no cart contents or login state leak between cases. The authenticated
//! variants either perform an interactive default-user login or seed the
//! fresh session from the artifact the bootstrap task persisted.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::{SuiteError, SuiteResult};
use crate::pages::{
    CartPage, CheckoutCompletePage, CheckoutStepOnePage, CheckoutStepTwoPage, InventoryPage,
    LoginPage,
};
use crate::probe;
use crate::session::{Session, StorageState};
use crate::users::{credentials, Role};

/// Default location of the persisted session artifact.
pub const DEFAULT_ARTIFACT_PATH: &str = ".auth/session.json";

/// Initialize logging for a test binary. Safe to call repeatedly.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// The persisted authentication artifact: captured session state plus the
/// provenance needed to detect that it no longer matches the active
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionArtifact {
    pub username: String,
    pub base_url: String,
    pub created_at: DateTime<Utc>,
    pub state: StorageState,
}

impl SessionArtifact {
    pub fn load(path: &Path) -> SuiteResult<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Write the artifact atomically (temp file + rename), creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> SuiteResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(self)?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    /// Reject the artifact when its provenance no longer matches the active
    /// configuration; credentials or environment changed since it was
    /// written.
    pub fn validate_for(&self, config: &Config, username: &str) -> SuiteResult<()> {
        if self.base_url != config.base_url.as_str() {
            return Err(SuiteError::StaleArtifact(format!(
                "artifact was captured against {}, configured base URL is {}",
                self.base_url, config.base_url
            )));
        }
        if self.username != username {
            return Err(SuiteError::StaleArtifact(format!(
                "artifact belongs to {:?}, expected {:?}",
                self.username, username
            )));
        }
        Ok(())
    }
}

/// Per-test fixture bundle: one isolated session plus page-object
/// accessors that borrow it.
pub struct TestContext {
    session: Session,
}

impl TestContext {
    /// Fresh, unauthenticated context from the environment configuration.
    pub async fn new() -> SuiteResult<Self> {
        Self::with_config(Config::from_env()?).await
    }

    pub async fn with_config(config: Config) -> SuiteResult<Self> {
        init_tracing();
        let session = Session::connect(config).await?;
        Ok(Self { session })
    }

    /// Context that has already logged in as the default user and seen the
    /// catalog render.
    pub async fn new_authenticated() -> SuiteResult<Self> {
        let ctx = Self::new().await?;
        ctx.login_as_default().await?;
        Ok(ctx)
    }

    /// Context seeded from the persisted authentication artifact instead of
    /// an interactive login.
    pub async fn new_preauthenticated(artifact_path: &Path) -> SuiteResult<Self> {
        let config = Config::from_env()?;
        let artifact = SessionArtifact::load(artifact_path)?;
        artifact.validate_for(&config, credentials(Role::Valid).username)?;

        let ctx = Self::with_config(config).await?;
        ctx.session.restore_storage_state(&artifact.state).await?;
        Ok(ctx)
    }

    async fn login_as_default(&self) -> SuiteResult<()> {
        let creds = credentials(Role::Valid);
        let login = self.login_page();
        login.goto().await?;
        login.login(creds.username, creds.password).await?;
        self.inventory_page().wait_for_list().await
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn login_page(&self) -> LoginPage<'_> {
        LoginPage::new(&self.session)
    }

    pub fn inventory_page(&self) -> InventoryPage<'_> {
        InventoryPage::new(&self.session)
    }

    pub fn cart_page(&self) -> CartPage<'_> {
        CartPage::new(&self.session)
    }

    pub fn checkout_step_one_page(&self) -> CheckoutStepOnePage<'_> {
        CheckoutStepOnePage::new(&self.session)
    }

    pub fn checkout_step_two_page(&self) -> CheckoutStepTwoPage<'_> {
        CheckoutStepTwoPage::new(&self.session)
    }

    pub fn checkout_complete_page(&self) -> CheckoutCompletePage<'_> {
        CheckoutCompletePage::new(&self.session)
    }

    /// End the underlying WebDriver session.
    pub async fn close(self) -> SuiteResult<()> {
        self.session.close().await
    }
}

/// One-time authentication bootstrap: log in as the default user, verify
/// the catalog is reachable, and persist the session artifact.
///
/// A failure here violates the precondition of every dependent test, so it
/// must abort the whole run loudly; there is no fallback to an
/// unauthenticated state.
pub async fn bootstrap_auth(config: Config, artifact_path: &Path) -> SuiteResult<()> {
    probe::wait_for_storefront(&config).await?;

    let creds = credentials(Role::Valid);
    let session = Session::connect(config.clone()).await?;

    let state = match capture_authenticated_state(&session, creds.username, creds.password).await {
        Ok(state) => state,
        Err(e) => {
            let _ = session.close().await;
            return Err(SuiteError::AuthBootstrap(format!(
                "default user login did not reach the catalog: {e}"
            )));
        }
    };
    session.close().await?;

    let artifact = SessionArtifact {
        username: creds.username.to_string(),
        base_url: config.base_url.as_str().to_string(),
        created_at: Utc::now(),
        state,
    };
    artifact.save(artifact_path)?;

    info!(path = %artifact_path.display(), user = creds.username, "session artifact persisted");
    Ok(())
}

async fn capture_authenticated_state(
    session: &Session,
    username: &str,
    password: &str,
) -> SuiteResult<StorageState> {
    let login = LoginPage::new(session);
    login.goto().await?;
    login.login(username, password).await?;

    // The final redirect is what sets the session cookies; wait for the
    // catalog before capturing anything.
    InventoryPage::new(session).wait_for_list().await?;

    session.storage_state().await
}
