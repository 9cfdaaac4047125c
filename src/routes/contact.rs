use actix_web::{HttpResponse, web};

use super::errors::SubmissionError;
use super::submission::process;
use crate::domain::ContactRequest;
use crate::notifier::{Inbox, Notifier};
use crate::presenter::contact_email;

#[tracing::instrument(
    name = "Forwarding a contact inquiry",
    skip(body, notifier),
    fields(endpoint = "contact")
)]
pub async fn send_contact_inquiry(
    body: Result<web::Bytes, actix_web::Error>,
    notifier: web::Data<Notifier>,
) -> Result<HttpResponse, SubmissionError> {
    process(Inbox::Contact, body, &notifier, ContactRequest::parse, contact_email).await
}
