use crate::config::SoccerConfig;
use crate::domain::ports::Notifier;
use crate::utils::error::{Result, SoccerError};
use crate::utils::validation;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Writes notifications to the log instead of delivering them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, subject: &str, message: &str, recipients: &[String]) -> Result<()> {
        tracing::info!(
            recipients = %recipients.join(","),
            "📣 {}: {}",
            subject,
            message
        );
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    sender: &'a str,
    subject: &'a str,
    message: &'a str,
    recipients: &'a [String],
}

/// Posts each notification as JSON to an HTTP endpoint.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: Client,
    endpoint: String,
    sender: String,
}

impl WebhookNotifier {
    pub fn new(endpoint: &str, sender: &str, timeout: Duration) -> Result<Self> {
        validation::validate_url("notifier.endpoint", endpoint)?;
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            sender: sender.to_string(),
        })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, subject: &str, message: &str, recipients: &[String]) -> Result<()> {
        let payload = WebhookPayload {
            sender: &self.sender,
            subject,
            message,
            recipients,
        };

        tracing::debug!("Posting notification '{}' to {}", subject, self.endpoint);
        let response = self.client.post(&self.endpoint).json(&payload).send().await?;
        tracing::debug!("Notification endpoint status: {}", response.status());

        if !response.status().is_success() {
            return Err(SoccerError::NotificationRejected {
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }
}

/// The notifier selected by `[notifier] kind` in the configuration.
#[derive(Debug, Clone)]
pub enum ConfiguredNotifier {
    Log(LogNotifier),
    Webhook(WebhookNotifier),
}

impl ConfiguredNotifier {
    pub fn from_config(config: &SoccerConfig) -> Result<Self> {
        match config.notifier.kind.as_str() {
            "log" => Ok(Self::Log(LogNotifier)),
            "webhook" => {
                let endpoint = validation::validate_required_field(
                    "notifier.endpoint",
                    &config.notifier.endpoint,
                )?;
                Ok(Self::Webhook(WebhookNotifier::new(
                    endpoint,
                    config.notifier_sender(),
                    Duration::from_secs(config.notifier_timeout_seconds()),
                )?))
            }
            other => Err(SoccerError::InvalidConfigValueError {
                field: "notifier.kind".to_string(),
                value: other.to_string(),
                reason: "Valid values: log, webhook".to_string(),
            }),
        }
    }
}

#[async_trait]
impl Notifier for ConfiguredNotifier {
    async fn notify(&self, subject: &str, message: &str, recipients: &[String]) -> Result<()> {
        match self {
            Self::Log(notifier) => notifier.notify(subject, message, recipients).await,
            Self::Webhook(notifier) => notifier.notify(subject, message, recipients).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_notifier_never_fails() {
        let recipients = vec!["RMA".to_string(), "BAR".to_string()];
        assert!(LogNotifier
            .notify("Match started", "kick-off", &recipients)
            .await
            .is_ok());
    }

    #[test]
    fn test_from_config_defaults_to_log() {
        let notifier = ConfiguredNotifier::from_config(&SoccerConfig::default()).unwrap();
        assert!(matches!(notifier, ConfiguredNotifier::Log(_)));
    }

    #[test]
    fn test_from_config_builds_webhook() {
        let config = SoccerConfig::from_toml_str(
            "[notifier]\nkind = \"webhook\"\nendpoint = \"http://localhost:9000/hook\"\n",
        )
        .unwrap();
        let notifier = ConfiguredNotifier::from_config(&config).unwrap();
        assert!(matches!(notifier, ConfiguredNotifier::Webhook(_)));
    }

    #[test]
    fn test_from_config_rejects_unknown_kind() {
        let config = SoccerConfig::from_toml_str("[notifier]\nkind = \"pigeon\"\n").unwrap();
        assert!(ConfiguredNotifier::from_config(&config).is_err());
    }

    #[test]
    fn test_webhook_rejects_bad_endpoint() {
        let err = WebhookNotifier::new("ftp://x", "a@b", Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, SoccerError::InvalidConfigValueError { .. }));
    }
}
