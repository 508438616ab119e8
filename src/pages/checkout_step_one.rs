//! Checkout step one: address entry

use crate::config::Route;
use crate::error::SuiteResult;
use crate::locator::Anchor;
use crate::pages::Chrome;
use crate::session::Session;

pub struct CheckoutStepOnePage<'a> {
    session: &'a Session,
    chrome: Chrome<'a>,

    pub first_name_input: Anchor,
    pub last_name_input: Anchor,
    pub postal_code_input: Anchor,
    pub continue_button: Anchor,
    pub cancel_button: Anchor,
    pub error_banner: Anchor,
}

impl<'a> CheckoutStepOnePage<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            chrome: Chrome::new(session),
            first_name_input: Anchor::id("first-name"),
            last_name_input: Anchor::id("last-name"),
            postal_code_input: Anchor::id("postal-code"),
            continue_button: Anchor::id("continue"),
            cancel_button: Anchor::id("cancel"),
            error_banner: Anchor::test_id("error"),
        }
    }

    pub fn chrome(&self) -> &Chrome<'a> {
        &self.chrome
    }

    pub async fn goto(&self) -> SuiteResult<()> {
        self.session.goto(Route::CheckoutStepOne).await
    }

    pub async fn fill_information(
        &self,
        first_name: &str,
        last_name: &str,
        postal_code: &str,
    ) -> SuiteResult<()> {
        self.session.fill(&self.first_name_input, first_name).await?;
        self.session.fill(&self.last_name_input, last_name).await?;
        self.session.fill(&self.postal_code_input, postal_code).await
    }

    /// Submit the form. The outcome is either the overview screen or the
    /// inline validation banner; callers gate on whichever they expect.
    pub async fn continue_to_overview(&self) -> SuiteResult<()> {
        self.session.click(&self.continue_button).await
    }

    /// Abandon checkout and return to the cart.
    pub async fn cancel(&self) -> SuiteResult<()> {
        self.session.click(&self.cancel_button).await?;
        self.session.wait_for_url(Route::Cart).await
    }

    /// Whether the validation banner is visible.
    pub async fn has_error(&self) -> SuiteResult<bool> {
        self.session.is_visible(&self.error_banner).await
    }

    /// Text of the validation banner, or `None` when no banner is shown.
    pub async fn error_message(&self) -> SuiteResult<Option<String>> {
        if self.has_error().await? {
            Ok(Some(self.session.text_or_default(&self.error_banner).await?))
        } else {
            Ok(None)
        }
    }
}
