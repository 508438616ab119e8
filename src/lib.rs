//! Browser E2E test suite for the Swag Labs demo storefront
//!
//! This crate drives a live browser through the WebDriver protocol and
//! asserts on resulting page state. The application under test is external;
//! what lives here is the page-object layer, the fixture/auth provisioning
//! model, and small pure utilities the scenarios share.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Test scenario (tests/)                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TestContext (fixtures)                                     │
//! │    ├── new() / new_authenticated() / new_preauthenticated() │
//! │    └── login_page() / inventory_page() / cart_page() / ...  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Page objects (pages/)                                      │
//! │    ├── LoginPage, InventoryPage, CartPage, Checkout*        │
//! │    └── Chrome (shared header/menu capability, composed)     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Session (session.rs)                                       │
//! │    ├── one WebDriver session per test                       │
//! │    ├── Anchor resolution: find/click/fill/text/visible      │
//! │    └── wait loops (url, visible, hidden) + storage state    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod fixtures;
pub mod locator;
pub mod pages;
pub mod probe;
pub mod random;
pub mod session;
pub mod users;

pub use config::{Config, Route};
pub use error::{SuiteError, SuiteResult};
pub use fixtures::TestContext;
pub use locator::Anchor;
pub use session::Session;
