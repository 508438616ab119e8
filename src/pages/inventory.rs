//! Catalog (inventory) screen

use fantoccini::elements::Element;
use fantoccini::Locator;

use crate::config::Route;
use crate::error::{SuiteError, SuiteResult};
use crate::locator::Anchor;
use crate::pages::{parse_price, Chrome};
use crate::session::Session;

/// The four fixed sort orderings the catalog offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    NameAscending,
    NameDescending,
    PriceAscending,
    PriceDescending,
}

impl SortOrder {
    /// Value attribute of the corresponding `<option>`.
    pub fn value(self) -> &'static str {
        match self {
            SortOrder::NameAscending => "az",
            SortOrder::NameDescending => "za",
            SortOrder::PriceAscending => "lohi",
            SortOrder::PriceDescending => "hilo",
        }
    }
}

pub struct InventoryPage<'a> {
    session: &'a Session,
    chrome: Chrome<'a>,

    pub inventory_list: Anchor,
    pub inventory_items: Anchor,
    pub item_names: Anchor,
    pub item_prices: Anchor,
    pub sort_select: Anchor,
}

impl<'a> InventoryPage<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self {
            session,
            chrome: Chrome::new(session),
            inventory_list: Anchor::css(".inventory_list"),
            inventory_items: Anchor::css(".inventory_item"),
            item_names: Anchor::css(".inventory_item_name"),
            item_prices: Anchor::css(".inventory_item_price"),
            sort_select: Anchor::css(".product_sort_container"),
        }
    }

    pub fn chrome(&self) -> &Chrome<'a> {
        &self.chrome
    }

    pub async fn goto(&self) -> SuiteResult<()> {
        self.session.goto(Route::Inventory).await
    }

    pub async fn list_visible(&self) -> SuiteResult<bool> {
        self.session.is_visible(&self.inventory_list).await
    }

    /// Wait for the product list to render.
    pub async fn wait_for_list(&self) -> SuiteResult<()> {
        self.session.wait_for_visible(&self.inventory_list).await
    }

    pub async fn product_count(&self) -> SuiteResult<usize> {
        Ok(self.session.find_all(&self.inventory_items).await?.len())
    }

    pub async fn product_titles(&self) -> SuiteResult<Vec<String>> {
        self.session.texts_of(&self.item_names).await
    }

    /// Listed prices as floats, currency prefix stripped.
    pub async fn product_prices(&self) -> SuiteResult<Vec<f64>> {
        let texts = self.session.texts_of(&self.item_prices).await?;
        Ok(texts.iter().map(|t| parse_price(t)).collect())
    }

    pub async fn sort_by(&self, order: SortOrder) -> SuiteResult<()> {
        self.session.select_value(&self.sort_select, order.value()).await
    }

    /// Add a product to the cart, locating the action button inside that
    /// product's own container. Unknown product names are an error.
    pub async fn add_to_cart(&self, product_name: &str) -> SuiteResult<()> {
        self.item_button(product_name, "Add to cart").await?.click().await?;
        Ok(())
    }

    /// Remove a product from the cart via its container-scoped button.
    pub async fn remove_from_cart(&self, product_name: &str) -> SuiteResult<()> {
        self.item_button(product_name, "Remove").await?.click().await?;
        Ok(())
    }

    /// Whether a product is in the cart, judged by its button label.
    pub async fn is_product_in_cart(&self, product_name: &str) -> SuiteResult<bool> {
        let container = self.item_container(product_name).await?;
        let button = container.find(Locator::Css("button")).await?;
        Ok(button.text().await?.contains("Remove"))
    }

    /// Open a product's detail view by clicking its name.
    pub async fn open_product_details(&self, product_name: &str) -> SuiteResult<()> {
        for name_el in self.session.find_all(&self.item_names).await? {
            if name_el.text().await? == product_name {
                name_el.click().await?;
                return Ok(());
            }
        }
        Err(SuiteError::ElementMissing(format!(
            "inventory item named {product_name:?}"
        )))
    }

    /// Container element of the product with the given visible name.
    async fn item_container(&self, product_name: &str) -> SuiteResult<Element> {
        for item in self.session.find_all(&self.inventory_items).await? {
            let title = item
                .find(Locator::Css(".inventory_item_name"))
                .await?
                .text()
                .await?;
            if title == product_name {
                return Ok(item);
            }
        }
        Err(SuiteError::ElementMissing(format!(
            "inventory item named {product_name:?}"
        )))
    }

    /// The action button with the given label, scoped to one product's
    /// container. Never a global button lookup.
    async fn item_button(&self, product_name: &str, label: &str) -> SuiteResult<Element> {
        let container = self.item_container(product_name).await?;
        for button in container.find_all(Locator::Css("button")).await? {
            if button.text().await?.contains(label) {
                return Ok(button);
            }
        }
        Err(SuiteError::ElementMissing(format!(
            "{label:?} button for {product_name:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_orders_map_to_select_values() {
        assert_eq!(SortOrder::NameAscending.value(), "az");
        assert_eq!(SortOrder::NameDescending.value(), "za");
        assert_eq!(SortOrder::PriceAscending.value(), "lohi");
        assert_eq!(SortOrder::PriceDescending.value(), "hilo");
    }
}
