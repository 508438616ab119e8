//! Checkout step two: order review
//!
//! The scenario-level correctness invariant here is that the displayed
//! total equals subtotal plus tax, within a floating-point tolerance;
//! the page object only surfaces the parsed amounts.

use crate::config::Route;
use crate::error::SuiteResult;
use crate::locator::Anchor;
use crate::pages::{extract_dollars, Chrome};
use crate::session::Session;

pub struct CheckoutStepTwoPage<'a> {
    session: &'a Session,
    chrome: Chrome<'a>,

    pub cart_items: Anchor,
    pub subtotal_label: Anchor,
    pub tax_label: Anchor,
    pub total_label: Anchor,
    pub finish_button: Anchor,
    pub cancel_button: Anchor,
}

impl<'a> CheckoutStepTwoPage<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            chrome: Chrome::new(session),
            cart_items: Anchor::test_id("inventory-item"),
            subtotal_label: Anchor::test_id("subtotal-label"),
            tax_label: Anchor::test_id("tax-label"),
            total_label: Anchor::test_id("total-label"),
            finish_button: Anchor::role("button", "Finish"),
            cancel_button: Anchor::role("button", "Cancel"),
        }
    }

    pub fn chrome(&self) -> &Chrome<'a> {
        &self.chrome
    }

    pub async fn goto(&self) -> SuiteResult<()> {
        self.session.goto(Route::CheckoutStepTwo).await
    }

    pub async fn item_count(&self) -> SuiteResult<usize> {
        Ok(self.session.find_all(&self.cart_items).await?.len())
    }

    pub async fn subtotal_visible(&self) -> SuiteResult<bool> {
        self.session.is_visible(&self.subtotal_label).await
    }

    /// Subtotal as a float; 0.0 when the label is absent or malformed.
    pub async fn subtotal(&self) -> SuiteResult<f64> {
        let text = self.session.text_or_default(&self.subtotal_label).await?;
        Ok(extract_dollars(&text))
    }

    /// Tax as a float; 0.0 when the label is absent or malformed.
    pub async fn tax(&self) -> SuiteResult<f64> {
        let text = self.session.text_or_default(&self.tax_label).await?;
        Ok(extract_dollars(&text))
    }

    /// Total as a float; 0.0 when the label is absent or malformed.
    pub async fn total(&self) -> SuiteResult<f64> {
        let text = self.session.text_or_default(&self.total_label).await?;
        Ok(extract_dollars(&text))
    }

    /// Complete the order; waits for the confirmation URL.
    pub async fn finish(&self) -> SuiteResult<()> {
        self.session.click(&self.finish_button).await?;
        self.session.wait_for_url(Route::CheckoutComplete).await
    }

    /// Abandon the order; waits for the catalog URL.
    pub async fn cancel(&self) -> SuiteResult<()> {
        self.session.click(&self.cancel_button).await?;
        self.session.wait_for_url(Route::Inventory).await
    }
}
