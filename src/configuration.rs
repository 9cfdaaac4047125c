use std::time::Duration;

use secrecy::SecretString;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::EmailAddress;
use crate::email_client::{EmailClient, Sender};
use crate::notifier::Recipients;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    pub notifications: NotificationSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub sender_name: Option<String>,
    /// Absent until an operator provides one; submissions fail until then.
    pub api_key: Option<SecretString>,
    pub timeout_ms: Option<u64>,
}

impl EmailClientSettings {
    pub fn client(&self) -> Result<EmailClient, anyhow::Error> {
        EmailClient::new(&self.base_url, self.sender()?, self.timeout())
    }

    pub fn sender(&self) -> Result<Sender, anyhow::Error> {
        let email = EmailAddress::parse(self.sender_email.clone())
            .map_err(|e| anyhow::anyhow!("Invalid sender email address: {e}"))?;
        Ok(Sender {
            name: self.sender_name.clone(),
            email,
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct NotificationSettings {
    pub fallback_recipient: String,
    pub recipient_override: Option<String>,
    pub appointments_recipient: Option<String>,
    pub contact_recipient: Option<String>,
}

impl NotificationSettings {
    pub fn recipients(&self) -> Result<Recipients, anyhow::Error> {
        Ok(Recipients {
            override_address: parse_optional("recipient_override", &self.recipient_override)?,
            appointments: parse_optional("appointments_recipient", &self.appointments_recipient)?,
            contact: parse_optional("contact_recipient", &self.contact_recipient)?,
            fallback: parse_recipient("fallback_recipient", &self.fallback_recipient)?,
        })
    }
}

fn parse_recipient(key: &str, value: &str) -> Result<EmailAddress, anyhow::Error> {
    EmailAddress::parse(value.to_string())
        .map_err(|e| anyhow::anyhow!("Invalid `notifications.{key}`: {e}"))
}

// Blank values (e.g. `NOTIFICATION_EMAIL=`) count as unset.
fn parse_optional(key: &str, value: &Option<String>) -> Result<Option<EmailAddress>, anyhow::Error> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse_recipient(key, v).map(Some),
    }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "{other} is not supported environment. Try to use `local` or `production`",
            )),
        }
    }
}

/// Layers `configuration/base.yaml`, the environment file picked by
/// `APP_ENVIRONMENT`, then `APP_*` variables. The provider's own
/// `RESEND_API_KEY` and `NOTIFICATION_EMAIL` variables win over all of them.
pub fn get_configuration() -> Result<Settings, anyhow::Error> {
    dotenvy::dotenv().ok();
    dotenvy::from_filename(".env.local").ok();

    let base_path = std::env::current_dir()?;
    let conf_dir = base_path.join("configuration");
    let env: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let settings = config::Config::builder()
        .add_source(config::File::from(conf_dir.join("base")).required(true))
        .add_source(config::File::from(conf_dir.join(env.as_str())).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .prefix_separator("_"),
        )
        .set_override_option("email_client.api_key", non_blank_var("RESEND_API_KEY"))?
        .set_override_option("notifications.recipient_override", non_blank_var("NOTIFICATION_EMAIL"))?
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}

fn non_blank_var(key: &str) -> Option<String> {
    non_blank(std::env::var(key).ok())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
