//! Login screen

use crate::config::Route;
use crate::error::SuiteResult;
use crate::locator::Anchor;
use crate::session::Session;

/// The login screen. The only page without the navigation chrome.
pub struct LoginPage<'a> {
    session: &'a Session,

    pub username_input: Anchor,
    pub password_input: Anchor,
    pub login_button: Anchor,
    pub error_banner: Anchor,
    pub logo: Anchor,
}

impl<'a> LoginPage<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            username_input: Anchor::id("user-name"),
            password_input: Anchor::id("password"),
            login_button: Anchor::id("login-button"),
            error_banner: Anchor::test_id("error"),
            logo: Anchor::css(".login_logo"),
        }
    }

    pub async fn goto(&self) -> SuiteResult<()> {
        self.session.goto(Route::Login).await
    }

    /// Fill the credential form and submit. Never fails on rejected
    /// credentials; negative-path scenarios assert on the error banner,
    /// positive-path scenarios on the redirect.
    pub async fn login(&self, username: &str, password: &str) -> SuiteResult<()> {
        self.session.fill(&self.username_input, username).await?;
        self.session.fill(&self.password_input, password).await?;
        self.session.click(&self.login_button).await
    }

    /// Whether the inline error banner is visible.
    pub async fn has_error(&self) -> SuiteResult<bool> {
        self.session.is_visible(&self.error_banner).await
    }

    /// Text of the error banner, or `None` when no banner is shown.
    pub async fn error_message(&self) -> SuiteResult<Option<String>> {
        if self.has_error().await? {
            Ok(Some(self.session.text_or_default(&self.error_banner).await?))
        } else {
            Ok(None)
        }
    }

    pub async fn logo_visible(&self) -> SuiteResult<bool> {
        self.session.is_visible(&self.logo).await
    }

    pub async fn logo_text(&self) -> SuiteResult<String> {
        self.session.text_or_default(&self.logo).await
    }
}
