//! Page objects for the storefront screens
//!
//! One module per logical screen. Every page object borrows its session and
//! re-resolves its anchors against the live page on each use; none of them
//! caches business state or holds assertions. Screens that carry the shared
//! navigation chrome compose a [`Chrome`] capability; the login screen has
//! none.

mod cart;
mod checkout_complete;
mod checkout_step_one;
mod checkout_step_two;
mod chrome;
mod inventory;
mod login;

pub use cart::CartPage;
pub use checkout_complete::CheckoutCompletePage;
pub use checkout_step_one::CheckoutStepOnePage;
pub use checkout_step_two::CheckoutStepTwoPage;
pub use chrome::Chrome;
pub use inventory::{InventoryPage, SortOrder};
pub use login::LoginPage;

use std::sync::OnceLock;

use regex::Regex;

fn dollars_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\$(\d+\.\d+)").expect("static pattern compiles"))
}

/// Extract a dollar amount embedded in label text, e.g.
/// `"Item total: $32.39"` -> `32.39`. Absent or malformed text yields 0.0;
/// "nothing rendered yet" is an expected transient state, not a failure.
pub(crate) fn extract_dollars(text: &str) -> f64 {
    dollars_pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}

/// Parse a bare price tag, e.g. `"$29.99"` -> `29.99`, tolerating the
/// currency prefix. Malformed text yields 0.0.
pub(crate) fn parse_price(text: &str) -> f64 {
    text.trim()
        .trim_start_matches('$')
        .parse()
        .unwrap_or(0.0)
}
