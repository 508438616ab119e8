//! Shared navigation chrome: header, burger menu, cart link
//!
//! Composed by every screen that renders the storefront header. Menu
//! open/close are idempotent; the open state is read from the menu
//! container's `aria-hidden` attribute rather than inspecting inline
//! styles.

use tracing::debug;

use crate::config::Route;
use crate::error::SuiteResult;
use crate::locator::Anchor;
use crate::session::Session;

pub struct Chrome<'a> {
    session: &'a Session,

    pub header_logo: Anchor,
    pub burger_button: Anchor,
    pub menu_close_button: Anchor,
    pub menu: Anchor,
    pub all_items_link: Anchor,
    pub about_link: Anchor,
    pub logout_link: Anchor,
    pub reset_link: Anchor,
    pub cart_link: Anchor,
    pub cart_badge: Anchor,
}

impl<'a> Chrome<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self {
            session,
            header_logo: Anchor::css(".app_logo"),
            burger_button: Anchor::id("react-burger-menu-btn"),
            menu_close_button: Anchor::id("react-burger-cross-btn"),
            menu: Anchor::css(".bm-menu-wrap"),
            all_items_link: Anchor::id("inventory_sidebar_link"),
            about_link: Anchor::id("about_sidebar_link"),
            logout_link: Anchor::id("logout_sidebar_link"),
            reset_link: Anchor::id("reset_sidebar_link"),
            cart_link: Anchor::css(".shopping_cart_link"),
            cart_badge: Anchor::css(".shopping_cart_badge"),
        }
    }

    /// Whether the side menu is currently open, per its ARIA state.
    pub async fn is_menu_open(&self) -> SuiteResult<bool> {
        let hidden = self.session.attr_of(&self.menu, "aria-hidden").await?;
        Ok(hidden.as_deref() != Some("true"))
    }

    /// Open the side menu. A no-op when it is already open.
    pub async fn open_menu(&self) -> SuiteResult<()> {
        if self.is_menu_open().await? {
            debug!("menu already open");
            return Ok(());
        }
        self.session.click(&self.burger_button).await?;
        self.session.wait_for_visible(&self.menu).await
    }

    /// Close the side menu. A no-op when it is already closed.
    pub async fn close_menu(&self) -> SuiteResult<()> {
        if !self.is_menu_open().await? {
            debug!("menu already closed");
            return Ok(());
        }
        self.session.click(&self.menu_close_button).await?;
        self.session.wait_for_hidden(&self.menu).await
    }

    /// Log out through the side menu and wait for the login screen.
    pub async fn logout(&self) -> SuiteResult<()> {
        self.open_menu().await?;
        self.session.wait_for_visible(&self.logout_link).await?;
        self.session.click(&self.logout_link).await?;
        self.session.wait_for_url(Route::Login).await
    }

    /// Reset the application state through the side menu.
    pub async fn reset_app_state(&self) -> SuiteResult<()> {
        self.open_menu().await?;
        self.session.click(&self.reset_link).await?;
        self.close_menu().await
    }

    /// Return to the catalog through the side menu.
    pub async fn go_to_all_items(&self) -> SuiteResult<()> {
        self.open_menu().await?;
        self.session.click(&self.all_items_link).await?;
        self.session.wait_for_url(Route::Inventory).await
    }

    /// Open the shopping cart and wait for its URL.
    pub async fn go_to_cart(&self) -> SuiteResult<()> {
        self.session.click(&self.cart_link).await?;
        self.session.wait_for_url(Route::Cart).await
    }

    /// Item count from the cart badge: 0 when the badge is absent or its
    /// text does not parse.
    pub async fn cart_badge_count(&self) -> SuiteResult<u32> {
        let text = self.session.text_or_default(&self.cart_badge).await?;
        Ok(text.trim().parse().unwrap_or(0))
    }
}
