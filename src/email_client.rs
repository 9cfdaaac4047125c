use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::EmailAddress;
use crate::notifier::{EmailProvider, MessageId};
use crate::presenter::Notification;

/// The fixed "from" identity every notification is sent with.
#[derive(Debug, Clone)]
pub struct Sender {
    pub name: Option<String>,
    pub email: EmailAddress,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name} <{}>", self.email),
            None => write!(f, "{}", self.email),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    #[error("The email provider rejected the request with status {status}")]
    Rejected {
        status: u16,
        details: serde_json::Value,
    },
    #[error("Failed to reach the email provider")]
    Transport(#[source] reqwest::Error),
}

impl ProviderError {
    /// Diagnostic payload safe to hand back to the caller.
    pub fn details(&self) -> serde_json::Value {
        match self {
            ProviderError::Rejected { details, .. } => details.clone(),
            // The reqwest error names the provider URL; that stays in the logs.
            ProviderError::Transport(_) => serde_json::json!({
                "name": "network_error",
                "message": "Failed to reach the email provider",
            }),
        }
    }
}

/// HTTP client for a Resend-compatible transactional email API.
#[derive(Clone)]
pub struct EmailClient {
    http_client: Client,
    emails_url: Url,
    sender: Sender,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: String,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: Option<MessageId>,
}

impl EmailClient {
    pub fn new(
        base_url: &str,
        sender: Sender,
        timeout: Option<Duration>,
    ) -> Result<Self, anyhow::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let emails_url = Url::parse(base_url)
            .and_then(|url| url.join("emails"))
            .context("Failed parsing base email api url.")?;
        Ok(Self {
            http_client: builder.build().context("Failed to build the HTTP client.")?,
            emails_url,
            sender,
        })
    }
}

#[async_trait]
impl EmailProvider for EmailClient {
    async fn send(
        &self,
        api_key: &SecretString,
        recipient: &EmailAddress,
        notification: &Notification,
    ) -> Result<Option<MessageId>, ProviderError> {
        let body = SendEmailRequest {
            from: self.sender.to_string(),
            to: [recipient.as_ref()],
            subject: &notification.subject,
            html: &notification.html,
            text: &notification.text,
        };

        let response = self
            .http_client
            .post(self.emails_url.clone())
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(ProviderError::Transport)?;

        let status = response.status();
        let payload = response.text().await.map_err(ProviderError::Transport)?;

        if !status.is_success() {
            let details = serde_json::from_str(&payload)
                .unwrap_or_else(|_| serde_json::json!({ "message": payload }));
            return Err(ProviderError::Rejected {
                status: status.as_u16(),
                details,
            });
        }

        match serde_json::from_str::<SendEmailResponse>(&payload) {
            Ok(r) => Ok(r.id),
            Err(e) => {
                tracing::warn!(
                    error.message = %e,
                    "The email provider accepted the email but its response carried no id"
                );
                Ok(None)
            }
        }
    }
}
