//! WebDriver session handle
//!
//! A [`Session`] wraps one live WebDriver session (one browser tab) together
//! with the validated suite configuration. It is the single capability
//! surface page objects resolve their anchors through: navigation, element
//! queries, actions, read-backs with documented defaults, and explicit
//! wait-for-condition loops.
//!
//! Each test owns exactly one session; sessions are never shared or reused
//! across tests, which keeps cart contents and login state from leaking
//! between cases.

use std::collections::BTreeMap;
use std::time::Instant;

use fantoccini::cookies::Cookie;
use fantoccini::elements::Element;
use fantoccini::ClientBuilder;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::time::sleep;
use tracing::debug;
use url::Url;

use crate::config::{Browser, Config, Route};
use crate::error::{SuiteError, SuiteResult};
use crate::locator::Anchor;

pub struct Session {
    client: fantoccini::Client,
    config: Config,
}

impl Session {
    /// Open a fresh WebDriver session (fresh cookies and storage) against
    /// the configured endpoint.
    pub async fn connect(config: Config) -> SuiteResult<Self> {
        let mut caps = serde_json::map::Map::new();
        match config.browser {
            Browser::Chrome => {
                let mut args = vec!["--disable-gpu".to_string()];
                if config.headless {
                    args.push("--headless=new".to_string());
                }
                caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
            }
            Browser::Firefox => {
                let mut args: Vec<String> = Vec::new();
                if config.headless {
                    args.push("-headless".to_string());
                }
                caps.insert("moz:firefoxOptions".to_string(), json!({ "args": args }));
            }
        }

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(&config.webdriver_url)
            .await?;
        client
            .set_window_size(config.viewport_width, config.viewport_height)
            .await?;

        debug!(webdriver = %config.webdriver_url, "session established");
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Navigate straight to a storefront screen.
    pub async fn goto(&self, route: Route) -> SuiteResult<()> {
        let url = self.config.url_for(route);
        debug!(%url, "navigate");
        self.client.goto(url.as_str()).await?;
        Ok(())
    }

    pub async fn current_url(&self) -> SuiteResult<Url> {
        Ok(self.client.current_url().await?)
    }

    /// Whether the session currently sits on the given screen.
    pub async fn at_route(&self, route: Route) -> SuiteResult<bool> {
        let expected = self.config.url_for(route);
        Ok(self.current_url().await?.as_str() == expected.as_str())
    }

    /// Resolve an anchor to a single element. A required element that is
    /// absent is an [`SuiteError::ElementMissing`] failure.
    pub async fn find(&self, anchor: &Anchor) -> SuiteResult<Element> {
        let query = anchor.query();
        match self.client.find(query.as_locator()).await {
            Ok(element) => Ok(element),
            Err(e) if e.is_no_such_element() => Err(SuiteError::ElementMissing(anchor.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    /// Resolve an anchor to all matching elements (possibly none).
    pub async fn find_all(&self, anchor: &Anchor) -> SuiteResult<Vec<Element>> {
        let query = anchor.query();
        Ok(self.client.find_all(query.as_locator()).await?)
    }

    /// Visibility of an optional element. Absent counts as hidden; this is
    /// an expected transient state, not a failure.
    pub async fn is_visible(&self, anchor: &Anchor) -> SuiteResult<bool> {
        let query = anchor.query();
        match self.client.find(query.as_locator()).await {
            Ok(element) => Ok(element.is_displayed().await?),
            Err(e) if e.is_no_such_element() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Text content of an optional element; absent yields the empty string.
    pub async fn text_or_default(&self, anchor: &Anchor) -> SuiteResult<String> {
        let query = anchor.query();
        match self.client.find(query.as_locator()).await {
            Ok(element) => Ok(element.text().await?),
            Err(e) if e.is_no_such_element() => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Text content of every element the anchor matches, in document order.
    pub async fn texts_of(&self, anchor: &Anchor) -> SuiteResult<Vec<String>> {
        let mut texts = Vec::new();
        for element in self.find_all(anchor).await? {
            texts.push(element.text().await?);
        }
        Ok(texts)
    }

    /// Attribute of an optional element; absent element yields `None`.
    pub async fn attr_of(&self, anchor: &Anchor, name: &str) -> SuiteResult<Option<String>> {
        let query = anchor.query();
        match self.client.find(query.as_locator()).await {
            Ok(element) => Ok(element.attr(name).await?),
            Err(e) if e.is_no_such_element() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn click(&self, anchor: &Anchor) -> SuiteResult<()> {
        self.find(anchor).await?.click().await?;
        Ok(())
    }

    pub async fn fill(&self, anchor: &Anchor, text: &str) -> SuiteResult<()> {
        let element = self.find(anchor).await?;
        element.clear().await?;
        element.send_keys(text).await?;
        Ok(())
    }

    /// Select an option of a `<select>` element by its value attribute.
    pub async fn select_value(&self, anchor: &Anchor, value: &str) -> SuiteResult<()> {
        self.find(anchor).await?.select_by_value(value).await?;
        Ok(())
    }

    /// Run a script in the page and return its result.
    pub async fn execute(
        &self,
        script: &str,
        args: Vec<serde_json::Value>,
    ) -> SuiteResult<serde_json::Value> {
        Ok(self.client.execute(script, args).await?)
    }

    /// Wait until the session reaches a screen's URL.
    pub async fn wait_for_url(&self, route: Route) -> SuiteResult<()> {
        let expected = self.config.url_for(route);
        let start = Instant::now();
        while start.elapsed() < self.config.wait_timeout {
            if self.current_url().await?.as_str() == expected.as_str() {
                return Ok(());
            }
            sleep(self.config.poll_interval).await;
        }
        Err(SuiteError::Timeout(format!("url to become {expected}")))
    }

    /// Wait until an element is present and displayed.
    pub async fn wait_for_visible(&self, anchor: &Anchor) -> SuiteResult<()> {
        let start = Instant::now();
        while start.elapsed() < self.config.wait_timeout {
            if self.is_visible(anchor).await? {
                return Ok(());
            }
            sleep(self.config.poll_interval).await;
        }
        Err(SuiteError::Timeout(format!("{anchor} to become visible")))
    }

    /// Wait until an element is hidden or gone.
    pub async fn wait_for_hidden(&self, anchor: &Anchor) -> SuiteResult<()> {
        let start = Instant::now();
        while start.elapsed() < self.config.wait_timeout {
            if !self.is_visible(anchor).await? {
                return Ok(());
            }
            sleep(self.config.poll_interval).await;
        }
        Err(SuiteError::Timeout(format!("{anchor} to become hidden")))
    }

    /// Capture the browser-side session state (cookies + localStorage).
    pub async fn storage_state(&self) -> SuiteResult<StorageState> {
        let cookies = self
            .client
            .get_all_cookies()
            .await?
            .into_iter()
            .map(|c| StoredCookie {
                name: c.name().to_string(),
                value: c.value().to_string(),
                path: c.path().map(String::from),
                secure: c.secure().unwrap_or(false),
            })
            .collect();

        let raw = self
            .client
            .execute(
                "const out = {}; \
                 for (let i = 0; i < localStorage.length; i++) { \
                   const k = localStorage.key(i); out[k] = localStorage.getItem(k); \
                 } \
                 return out;",
                vec![],
            )
            .await?;
        let local_storage = serde_json::from_value(raw).unwrap_or_default();

        Ok(StorageState {
            cookies,
            local_storage,
        })
    }

    /// Seed this session from a previously captured state. Navigates to the
    /// base URL first (cookies attach to the active document's origin) and
    /// reloads afterwards so the application picks the state up.
    pub async fn restore_storage_state(&self, state: &StorageState) -> SuiteResult<()> {
        self.client.goto(self.config.base_url.as_str()).await?;

        for stored in &state.cookies {
            let mut cookie = Cookie::new(stored.name.clone(), stored.value.clone());
            if let Some(path) = &stored.path {
                cookie.set_path(path.clone());
            }
            cookie.set_secure(stored.secure);
            self.client.add_cookie(cookie).await?;
        }

        for (key, value) in &state.local_storage {
            self.client
                .execute(
                    "localStorage.setItem(arguments[0], arguments[1]);",
                    vec![json!(key), json!(value)],
                )
                .await?;
        }

        self.client.refresh().await?;
        Ok(())
    }

    /// End the WebDriver session.
    pub async fn close(self) -> SuiteResult<()> {
        self.client.close().await?;
        Ok(())
    }
}

/// Serialized browser-side session state, the body of the persisted
/// authentication artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageState {
    pub cookies: Vec<StoredCookie>,
    pub local_storage: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCookie {
    pub name: String,
    pub value: String,
    pub path: Option<String>,
    pub secure: bool,
}
