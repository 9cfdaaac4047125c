use actix_web::{HttpResponse, web};

use super::errors::SubmissionError;
use super::submission::process;
use crate::domain::AppointmentRequest;
use crate::notifier::{Inbox, Notifier};
use crate::presenter::appointment_email;

#[tracing::instrument(
    name = "Forwarding an appointment request",
    skip(body, notifier),
    fields(endpoint = "appointments")
)]
pub async fn request_appointment(
    body: Result<web::Bytes, actix_web::Error>,
    notifier: web::Data<Notifier>,
) -> Result<HttpResponse, SubmissionError> {
    process(
        Inbox::Appointments,
        body,
        &notifier,
        AppointmentRequest::parse,
        appointment_email,
    )
    .await
}
