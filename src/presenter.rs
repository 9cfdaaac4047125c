//! Turns validated submissions into the email that gets sent to the clinic.
//!
//! User-supplied text only reaches the HTML body HTML-escaped, so a submission
//! cannot inject markup into the notification.
mod appointment;
mod contact;
mod labels;

use chrono::{DateTime, NaiveDate};

pub use appointment::appointment_email;
pub use contact::contact_email;
pub use labels::{service_label, time_slot_label};

/// A rendered notification, ready for the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Renders `2024-01-01` (or an RFC 3339 timestamp) as `Monday, 1 January 2024`.
/// Anything else comes back unchanged.
pub fn format_date(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|d| d.date_naive())
        })
        .map(|d| d.format("%A, %-d %B %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn escape(value: &str) -> String {
    tera::escape_html(value)
}

/// Escaped text with its line breaks kept as `<br>`.
fn escape_multiline(value: &str) -> String {
    value
        .lines()
        .map(escape)
        .collect::<Vec<_>>()
        .join("<br>\n")
}

fn html_field(label: &str, value: &str) -> String {
    format!("<p><strong>{label}:</strong> {}</p>\n", escape(value))
}

fn text_field(label: &str, value: &str) -> String {
    format!("{label}: {value}\n")
}

// Subjects are header values; keep them on one line.
fn subject_line(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
