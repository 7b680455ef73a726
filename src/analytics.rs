//! Usage analytics.
//!
//! Support is decided once at startup. The resulting [`Analytics`] value is
//! handed to whoever emits events; nothing here is global.

use crate::config::Config;
use crate::error::{AnalyticsError, AnalyticsUnsupported};
use serde::Serialize;
use tokio::task::JoinHandle;

pub const STARTUP_EVENT: &str = "test_event_fired";

#[derive(Debug, Serialize)]
struct EventPayload<'a> {
    client_id: &'a str,
    name: &'a str,
}

#[derive(Debug, Clone)]
pub struct AnalyticsHandle {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    client_id: String,
}

impl AnalyticsHandle {
    pub async fn log_event(&self, name: &str) -> Result<(), AnalyticsError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&EventPayload {
                client_id: &self.client_id,
                name,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyticsError::Status(status.as_u16()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum Analytics {
    Supported(AnalyticsHandle),
    Unsupported(AnalyticsUnsupported),
}

impl Analytics {
    pub fn init(config: &Config) -> Self {
        match Self::try_init(config) {
            Ok(handle) => {
                tracing::info!(endpoint = %handle.endpoint, "analytics initialized");
                Analytics::Supported(handle)
            }
            Err(unsupported) => {
                tracing::info!("{}", unsupported);
                Analytics::Unsupported(unsupported)
            }
        }
    }

    fn try_init(config: &Config) -> Result<AnalyticsHandle, AnalyticsUnsupported> {
        let unsupported = |reason: String| AnalyticsUnsupported { reason };

        if config.analytics_disabled {
            return Err(unsupported("disabled by configuration".to_string()));
        }
        let raw = config
            .analytics_url
            .as_deref()
            .ok_or_else(|| unsupported("no analytics endpoint configured".to_string()))?;
        let endpoint = reqwest::Url::parse(raw)
            .map_err(|e| unsupported(format!("invalid endpoint {}: {}", raw, e)))?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| unsupported(format!("http client unavailable: {}", e)))?;

        Ok(AnalyticsHandle {
            client,
            endpoint,
            client_id: format!("{:016x}", rand::random::<u64>()),
        })
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Analytics::Supported(_))
    }

    /// Fire-and-forget. Failures end up in the log only.
    pub fn spawn_event(&self, name: &'static str) -> Option<JoinHandle<()>> {
        let Analytics::Supported(handle) = self else {
            return None;
        };
        let handle = handle.clone();
        Some(tokio::spawn(async move {
            match handle.log_event(name).await {
                Ok(()) => tracing::info!(event = name, "analytics event sent"),
                Err(e) => tracing::warn!(event = name, "analytics event failed: {}", e),
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_with(url: Option<&str>, disabled: bool) -> Config {
        let mut config = Config::from_lookup(|_| None);
        config.analytics_url = url.map(str::to_string);
        config.analytics_disabled = disabled;
        config
    }

    #[test]
    fn test_unsupported_without_endpoint() {
        let analytics = Analytics::init(&config_with(None, false));
        assert!(!analytics.is_supported());
        assert!(analytics.spawn_event(STARTUP_EVENT).is_none());
    }

    #[test]
    fn test_unsupported_when_disabled() {
        let analytics = Analytics::init(&config_with(Some("http://localhost/collect"), true));
        match analytics {
            Analytics::Unsupported(reason) => assert!(reason.reason.contains("disabled")),
            Analytics::Supported(_) => panic!("analytics should be off"),
        }
    }

    #[test]
    fn test_unsupported_with_invalid_endpoint() {
        let analytics = Analytics::init(&config_with(Some("not a url"), false));
        assert!(!analytics.is_supported());
    }

    #[tokio::test]
    async fn test_startup_event_is_posted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/collect"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/collect", server.uri());
        let analytics = Analytics::init(&config_with(Some(&url), false));
        assert!(analytics.is_supported());

        analytics.spawn_event(STARTUP_EVENT).unwrap().await.unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = requests[0].body_json().unwrap();
        assert_eq!(body["name"], STARTUP_EVENT);
    }

    #[tokio::test]
    async fn test_failed_event_does_not_panic() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let analytics = Analytics::init(&config_with(Some(&server.uri()), false));
        let Analytics::Supported(handle) = &analytics else {
            panic!("expected supported analytics");
        };
        let err = handle.log_event(STARTUP_EVENT).await.unwrap_err();
        assert!(matches!(err, AnalyticsError::Status(500)));

        analytics.spawn_event(STARTUP_EVENT).unwrap().await.unwrap();
    }
}
