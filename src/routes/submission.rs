use actix_web::{HttpResponse, web};
use serde_json::{Map, Value};

use super::errors::{ApiResponse, SubmissionError};
use crate::domain::ValidationError;
use crate::notifier::{Inbox, Notifier};
use crate::presenter::Notification;

/// Validate, render, notify. Any failing stage stops the ones after it.
pub async fn process<T>(
    inbox: Inbox,
    body: Result<web::Bytes, actix_web::Error>,
    notifier: &Notifier,
    validate: impl FnOnce(&Map<String, Value>) -> Result<T, ValidationError>,
    present: impl FnOnce(&T) -> Notification,
) -> Result<HttpResponse, SubmissionError> {
    let outcome = run_stages(inbox, body, notifier, validate, present).await;
    if let Err(e) = &outcome {
        log_failure(inbox, e);
    }
    outcome
}

async fn run_stages<T>(
    inbox: Inbox,
    body: Result<web::Bytes, actix_web::Error>,
    notifier: &Notifier,
    validate: impl FnOnce(&Map<String, Value>) -> Result<T, ValidationError>,
    present: impl FnOnce(&T) -> Notification,
) -> Result<HttpResponse, SubmissionError> {
    let body = body.map_err(SubmissionError::unreadable_body)?;
    let fields = parse_object(&body)?;
    let submission = validate(&fields)?;
    let notification = present(&submission);
    let id = notifier.notify(inbox, &notification).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::sent(id)))
}

fn parse_object(body: &[u8]) -> Result<Map<String, Value>, SubmissionError> {
    match serde_json::from_slice(body).map_err(SubmissionError::MalformedJson)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(SubmissionError::NotAnObject),
    }
}

fn log_failure(inbox: Inbox, e: &SubmissionError) {
    match e {
        SubmissionError::Validation(_) | SubmissionError::UnreadableBody { .. } => {
            tracing::warn!(
                endpoint = inbox.as_str(),
                failure.kind = e.kind(),
                error.message = %e,
                "Submission rejected"
            )
        }
        _ => tracing::error!(
            endpoint = inbox.as_str(),
            failure.kind = e.kind(),
            error.cause_chain = ?e,
            error.message = %e,
            "Submission failed"
        ),
    }
}
