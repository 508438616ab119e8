//! Suite configuration and storefront routes
//!
//! The base URL is loaded and validated exactly once; everything downstream
//! receives the resulting [`Config`] by reference instead of re-reading the
//! environment. A missing or malformed base URL is a startup failure, not a
//! deferred one.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::{SuiteError, SuiteResult};

/// Environment variable naming the storefront origin. Required.
pub const BASE_URL_VAR: &str = "STOREFRONT_BASE_URL";

/// Environment variable naming the WebDriver endpoint.
pub const WEBDRIVER_URL_VAR: &str = "WEBDRIVER_URL";

/// Environment variable selecting the browser (`chrome` or `firefox`).
pub const BROWSER_VAR: &str = "E2E_BROWSER";

/// Environment variable toggling headless mode (`0`/`false` to disable).
pub const HEADLESS_VAR: &str = "E2E_HEADLESS";

const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Browser {
    #[default]
    Chrome,
    Firefox,
}

/// One logical screen of the storefront, with its fixed relative path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Inventory,
    Cart,
    CheckoutStepOne,
    CheckoutStepTwo,
    CheckoutComplete,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "",
            Route::Inventory => "inventory.html",
            Route::Cart => "cart.html",
            Route::CheckoutStepOne => "checkout-step-one.html",
            Route::CheckoutStepTwo => "checkout-step-two.html",
            Route::CheckoutComplete => "checkout-complete.html",
        }
    }
}

/// Process-wide suite configuration, validated once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storefront origin, normalized to end with a trailing slash.
    pub base_url: Url,

    /// WebDriver endpoint to open sessions against.
    pub webdriver_url: String,

    /// Browser to request from the WebDriver server.
    pub browser: Browser,

    /// Run the browser headless.
    pub headless: bool,

    /// Viewport dimensions.
    pub viewport_width: u32,
    pub viewport_height: u32,

    /// Upper bound for every wait-for-condition loop.
    pub wait_timeout: Duration,

    /// Polling interval inside wait loops.
    pub poll_interval: Duration,

    /// Upper bound for the storefront availability probe.
    pub probe_timeout: Duration,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::Config`] if the base URL is missing or not an
    /// absolute http(s) URL.
    pub fn from_env() -> SuiteResult<Self> {
        let raw = env::var(BASE_URL_VAR).map_err(|_| {
            SuiteError::Config(format!("{BASE_URL_VAR} is not set; the suite cannot run"))
        })?;
        let mut config = Self::for_origin(&raw)?;

        if let Ok(webdriver_url) = env::var(WEBDRIVER_URL_VAR) {
            config.webdriver_url = webdriver_url;
        }
        if let Ok(browser) = env::var(BROWSER_VAR) {
            config.browser = match browser.as_str() {
                "firefox" => Browser::Firefox,
                _ => Browser::Chrome,
            };
        }
        if let Ok(headless) = env::var(HEADLESS_VAR) {
            config.headless = !matches!(headless.as_str(), "0" | "false");
        }

        Ok(config)
    }

    /// Build a configuration for a given storefront origin with default
    /// settings for everything else. Used directly by tests that need a
    /// mock origin.
    pub fn for_origin(origin: &str) -> SuiteResult<Self> {
        let mut raw = origin.trim().to_string();
        if raw.is_empty() {
            return Err(SuiteError::Config(format!(
                "empty storefront base URL (set {BASE_URL_VAR})"
            )));
        }
        if !raw.ends_with('/') {
            raw.push('/');
        }

        let base_url = Url::parse(&raw)
            .map_err(|e| SuiteError::Config(format!("invalid base URL {raw:?}: {e}")))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(SuiteError::Config(format!(
                "base URL {base_url} must use http or https"
            )));
        }

        Ok(Self {
            base_url,
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            browser: Browser::default(),
            headless: true,
            viewport_width: 1280,
            viewport_height: 720,
            wait_timeout: Duration::from_secs(5),
            poll_interval: Duration::from_millis(100),
            probe_timeout: Duration::from_secs(30),
        })
    }

    /// Absolute URL for a storefront screen.
    pub fn url_for(&self, route: Route) -> Url {
        // base_url is normalized with a trailing slash, and route paths are
        // fixed relative segments, so the join cannot fail.
        self.base_url
            .join(route.path())
            .expect("route paths are valid relative URLs")
    }
}
