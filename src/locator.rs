//! Element anchors
//!
//! An [`Anchor`] is a small immutable value describing *how* to find an
//! element: a strategy plus a selector expression. Anchors are resolved
//! against the live page on every use (they never hold DOM nodes), so a page
//! object stays valid across navigations for as long as its session lives.
//!
//! Preference order for robustness: role, test identifier, CSS class.

use std::fmt;

use fantoccini::Locator;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anchor {
    /// CSS selector, e.g. `.inventory_item`.
    Css(String),
    /// Element id, e.g. `login-button`.
    Id(String),
    /// The storefront's `data-test` attribute.
    TestId(String),
    /// ARIA role plus accessible name, e.g. a button labelled "Checkout".
    /// WebDriver has no native role queries, so this renders to XPath.
    Role { role: String, name: String },
}

impl Anchor {
    pub fn css(selector: impl Into<String>) -> Self {
        Anchor::Css(selector.into())
    }

    pub fn id(id: impl Into<String>) -> Self {
        Anchor::Id(id.into())
    }

    pub fn test_id(id: impl Into<String>) -> Self {
        Anchor::TestId(id.into())
    }

    pub fn role(role: impl Into<String>, name: impl Into<String>) -> Self {
        Anchor::Role {
            role: role.into(),
            name: name.into(),
        }
    }

    /// Render the anchor to a concrete WebDriver query.
    pub(crate) fn query(&self) -> AnchorQuery {
        match self {
            Anchor::Css(selector) => AnchorQuery::css(selector.clone()),
            Anchor::Id(id) => AnchorQuery::css(format!("#{id}")),
            Anchor::TestId(id) => AnchorQuery::css(format!("[data-test=\"{id}\"]")),
            Anchor::Role { role, name } => {
                let tag = match role.as_str() {
                    "button" => "button",
                    "link" => "a",
                    _ => "*",
                };
                let name = xpath_literal(name);
                let expr = if tag == "*" {
                    format!("//*[@role={role}][normalize-space(.)={name}]", role = xpath_literal(role))
                } else {
                    format!("//{tag}[normalize-space(.)={name}]")
                };
                AnchorQuery::xpath(expr)
            }
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Css(selector) => write!(f, "css `{selector}`"),
            Anchor::Id(id) => write!(f, "id `{id}`"),
            Anchor::TestId(id) => write!(f, "test id `{id}`"),
            Anchor::Role { role, name } => write!(f, "{role} named {name:?}"),
        }
    }
}

/// A rendered query, ready to hand to the WebDriver client.
#[derive(Debug, Clone)]
pub(crate) struct AnchorQuery {
    kind: QueryKind,
    expr: String,
}

#[derive(Debug, Clone, Copy)]
enum QueryKind {
    Css,
    XPath,
}

impl AnchorQuery {
    fn css(expr: String) -> Self {
        Self {
            kind: QueryKind::Css,
            expr,
        }
    }

    fn xpath(expr: String) -> Self {
        Self {
            kind: QueryKind::XPath,
            expr,
        }
    }

    pub(crate) fn as_locator(&self) -> Locator<'_> {
        match self.kind {
            QueryKind::Css => Locator::Css(&self.expr),
            QueryKind::XPath => Locator::XPath(&self.expr),
        }
    }

    #[cfg(test)]
    fn expr(&self) -> &str {
        &self.expr
    }
}

/// Quote a string as an XPath literal. Accessible names here never mix both
/// quote characters, so picking the other one is sufficient.
fn xpath_literal(value: &str) -> String {
    if value.contains('\'') {
        format!("\"{value}\"")
    } else {
        format!("'{value}'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_anchor_renders_verbatim() {
        assert_eq!(Anchor::css(".inventory_item").query().expr(), ".inventory_item");
    }

    #[test]
    fn id_anchor_renders_to_css() {
        assert_eq!(Anchor::id("login-button").query().expr(), "#login-button");
    }

    #[test]
    fn test_id_anchor_targets_data_test() {
        assert_eq!(
            Anchor::test_id("error").query().expr(),
            "[data-test=\"error\"]"
        );
    }

    #[test]
    fn button_role_renders_to_xpath() {
        assert_eq!(
            Anchor::role("button", "Checkout").query().expr(),
            "//button[normalize-space(.)='Checkout']"
        );
    }

    #[test]
    fn unknown_role_falls_back_to_role_attribute() {
        assert_eq!(
            Anchor::role("tab", "Details").query().expr(),
            "//*[@role='tab'][normalize-space(.)='Details']"
        );
    }

    #[test]
    fn names_with_apostrophes_switch_quotes() {
        assert_eq!(xpath_literal("Don't"), "\"Don't\"");
        assert_eq!(xpath_literal("Finish"), "'Finish'");
    }
}
