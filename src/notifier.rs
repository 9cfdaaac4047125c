use std::sync::Arc;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::domain::EmailAddress;
use crate::email_client::ProviderError;
use crate::presenter::Notification;

/// Opaque id the provider hands back for every accepted email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for MessageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Anything able to deliver a rendered notification to one recipient.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(
        &self,
        api_key: &SecretString,
        recipient: &EmailAddress,
        notification: &Notification,
    ) -> Result<Option<MessageId>, ProviderError>;
}

/// Which form a notification comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inbox {
    Appointments,
    Contact,
}

impl Inbox {
    pub fn as_str(&self) -> &'static str {
        match self {
            Inbox::Appointments => "appointments",
            Inbox::Contact => "contact",
        }
    }
}

/// Where notifications go. The environment override wins over the
/// per-inbox address, which wins over the fallback.
#[derive(Debug, Clone)]
pub struct Recipients {
    pub override_address: Option<EmailAddress>,
    pub appointments: Option<EmailAddress>,
    pub contact: Option<EmailAddress>,
    pub fallback: EmailAddress,
}

impl Recipients {
    pub fn resolve(&self, inbox: Inbox) -> &EmailAddress {
        let per_inbox = match inbox {
            Inbox::Appointments => self.appointments.as_ref(),
            Inbox::Contact => self.contact.as_ref(),
        };
        self.override_address
            .as_ref()
            .or(per_inbox)
            .unwrap_or(&self.fallback)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum NotifyError {
    #[error("Email service not configured")]
    Configuration,
    #[error("Failed to send email")]
    Delivery(#[source] ProviderError),
}

#[derive(Clone)]
pub struct Notifier {
    provider: Arc<dyn EmailProvider>,
    api_key: Option<SecretString>,
    recipients: Recipients,
}

impl Notifier {
    pub fn new(
        provider: Arc<dyn EmailProvider>,
        api_key: Option<SecretString>,
        recipients: Recipients,
    ) -> Self {
        // A blank key is treated as no key at all.
        let api_key = api_key.filter(|k| !k.expose_secret().trim().is_empty());
        Self {
            provider,
            api_key,
            recipients,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Makes exactly one delivery attempt; nothing is retried.
    #[tracing::instrument(
        name = "Sending a notification email",
        skip(self, notification),
        fields(inbox = inbox.as_str(), recipient = tracing::field::Empty)
    )]
    pub async fn notify(
        &self,
        inbox: Inbox,
        notification: &Notification,
    ) -> Result<Option<MessageId>, NotifyError> {
        let Some(api_key) = &self.api_key else {
            tracing::error!("No email provider API key is configured");
            return Err(NotifyError::Configuration);
        };

        let recipient = self.recipients.resolve(inbox);
        tracing::Span::current().record("recipient", tracing::field::display(recipient));

        let id = self
            .provider
            .send(api_key, recipient, notification)
            .await
            .map_err(NotifyError::Delivery)?;

        tracing::info!(message_id = ?id, "Notification email sent");
        Ok(id)
    }
}
