//! Widget Bundle Loading
//!
//! Fetches the widget's compiled script once at startup. A failed or
//! unconfigured fetch never prevents the server from starting: a small
//! placeholder script that reports the problem in the browser console is
//! used instead.

use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

/// Script used when no bundle URL is configured
pub const NOT_CONFIGURED_SCRIPT: &str = "console.error('WIDGET_REPO_URL not configured');";
/// Script used when the bundle could not be fetched
pub const NOT_LOADED_SCRIPT: &str = "console.error('Widget bundle not loaded');";

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Where a bundle came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleSource {
    Remote(String),
    Inline,
    NotConfigured,
    Fallback,
}

/// The widget script body, treated as an opaque string
#[derive(Debug, Clone)]
pub struct WidgetBundle {
    pub script: String,
    pub source: BundleSource,
}

impl WidgetBundle {
    /// Uses `script` as-is. Mostly useful for tests and embedded bundles.
    pub fn from_script(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            source: BundleSource::Inline,
        }
    }

    /// Loads the bundle from `url`, falling back to a placeholder script.
    pub async fn load(url: Option<&str>, timeout: Duration) -> Self {
        let Some(url) = url.filter(|u| !u.is_empty()) else {
            warn!("WIDGET_REPO_URL not set, widget will not load");
            return Self {
                script: NOT_CONFIGURED_SCRIPT.to_string(),
                source: BundleSource::NotConfigured,
            };
        };

        match fetch_bundle(url, timeout).await {
            Ok(script) => {
                info!(bytes = script.len(), url, "widget bundle loaded");
                Self {
                    script,
                    source: BundleSource::Remote(url.to_string()),
                }
            }
            Err(e) => {
                warn!("failed to load widget bundle: {}", e);
                Self {
                    script: NOT_LOADED_SCRIPT.to_string(),
                    source: BundleSource::Fallback,
                }
            }
        }
    }
}

/// Downloads the script body at `url`.
pub async fn fetch_bundle(url: &str, timeout: Duration) -> Result<String, WidgetError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(WidgetError::Client)?;

    let request_error = |source: reqwest::Error| WidgetError::Request {
        url: url.to_string(),
        source,
    };

    let response = client.get(url).send().await.map_err(request_error)?;
    let status = response.status();
    if !status.is_success() {
        return Err(WidgetError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(request_error)
}
