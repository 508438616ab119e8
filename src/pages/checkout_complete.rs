//! Checkout confirmation screen

use crate::config::Route;
use crate::error::SuiteResult;
use crate::locator::Anchor;
use crate::pages::Chrome;
use crate::session::Session;

pub struct CheckoutCompletePage<'a> {
    session: &'a Session,
    chrome: Chrome<'a>,

    pub complete_header: Anchor,
    pub complete_text: Anchor,
    pub back_home_button: Anchor,
}

impl<'a> CheckoutCompletePage<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            chrome: Chrome::new(session),
            complete_header: Anchor::css(".complete-header"),
            complete_text: Anchor::css(".complete-text"),
            back_home_button: Anchor::id("back-to-products"),
        }
    }

    pub fn chrome(&self) -> &Chrome<'a> {
        &self.chrome
    }

    pub async fn goto(&self) -> SuiteResult<()> {
        self.session.goto(Route::CheckoutComplete).await
    }

    /// Confirmation header text; empty when not rendered yet.
    pub async fn header_text(&self) -> SuiteResult<String> {
        self.session.text_or_default(&self.complete_header).await
    }

    /// Confirmation body text; empty when not rendered yet.
    pub async fn message_text(&self) -> SuiteResult<String> {
        self.session.text_or_default(&self.complete_text).await
    }

    /// Return to the catalog; waits for the inventory URL.
    pub async fn back_to_products(&self) -> SuiteResult<()> {
        self.session.click(&self.back_home_button).await?;
        self.session.wait_for_url(Route::Inventory).await
    }
}
