//! Shopping cart screen

use fantoccini::Locator;

use crate::config::Route;
use crate::error::{SuiteError, SuiteResult};
use crate::locator::Anchor;
use crate::pages::Chrome;
use crate::session::Session;

pub struct CartPage<'a> {
    session: &'a Session,
    chrome: Chrome<'a>,

    pub cart_list: Anchor,
    pub cart_items: Anchor,
    pub item_names: Anchor,
    pub continue_shopping_button: Anchor,
    pub checkout_button: Anchor,
}

impl<'a> CartPage<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            chrome: Chrome::new(session),
            cart_list: Anchor::test_id("cart-list"),
            cart_items: Anchor::test_id("inventory-item"),
            item_names: Anchor::test_id("inventory-item-name"),
            continue_shopping_button: Anchor::role("button", "Continue Shopping"),
            checkout_button: Anchor::role("button", "Checkout"),
        }
    }

    pub fn chrome(&self) -> &Chrome<'a> {
        &self.chrome
    }

    pub async fn goto(&self) -> SuiteResult<()> {
        self.session.goto(Route::Cart).await
    }

    pub async fn list_visible(&self) -> SuiteResult<bool> {
        self.session.is_visible(&self.cart_list).await
    }

    pub async fn item_count(&self) -> SuiteResult<usize> {
        Ok(self.session.find_all(&self.cart_items).await?.len())
    }

    pub async fn item_names(&self) -> SuiteResult<Vec<String>> {
        self.session.texts_of(&self.item_names).await
    }

    /// Remove a line item via the button inside its own container.
    pub async fn remove_item(&self, item_name: &str) -> SuiteResult<()> {
        for item in self.session.find_all(&self.cart_items).await? {
            let title = item
                .find(Locator::Css(".inventory_item_name"))
                .await?
                .text()
                .await?;
            if title == item_name {
                item.find(Locator::Css(".cart_button")).await?.click().await?;
                return Ok(());
            }
        }
        Err(SuiteError::ElementMissing(format!(
            "cart item named {item_name:?}"
        )))
    }

    /// Back to the catalog; waits for the inventory URL.
    pub async fn continue_shopping(&self) -> SuiteResult<()> {
        self.session.click(&self.continue_shopping_button).await?;
        self.session.wait_for_url(Route::Inventory).await
    }

    /// Proceed to checkout; waits for the step-one URL.
    pub async fn checkout(&self) -> SuiteResult<()> {
        self.session.click(&self.checkout_button).await?;
        self.session.wait_for_url(Route::CheckoutStepOne).await
    }
}
