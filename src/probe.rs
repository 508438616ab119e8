//! Storefront availability probe
//!
//! Polls the configured origin over plain HTTP until it answers, so the
//! bootstrap task (and any scenario that wants it) can fail fast with a
//! distinct error when the application under test is down rather than
//! drowning in per-element timeouts.

use std::time::Duration;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{SuiteError, SuiteResult};

/// Wait for the storefront to respond successfully at its base URL.
///
/// # Errors
///
/// Returns [`SuiteError::Unavailable`] with the attempt count once
/// `config.probe_timeout` elapses without a successful response.
pub async fn wait_for_storefront(config: &Config) -> SuiteResult<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()?;

    let start = std::time::Instant::now();
    let mut attempts = 0;

    while start.elapsed() < config.probe_timeout {
        attempts += 1;

        match client.get(config.base_url.as_str()).send().await {
            Ok(resp) if resp.status().is_success() => {
                info!(url = %config.base_url, attempts, "storefront is reachable");
                return Ok(());
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "storefront answered with an error status");
            }
            Err(e) => {
                if attempts == 1 {
                    info!(url = %config.base_url, "waiting for the storefront...");
                }
                if !e.is_connect() {
                    warn!("availability probe error: {e}");
                }
            }
        }

        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    Err(SuiteError::Unavailable(attempts))
}
