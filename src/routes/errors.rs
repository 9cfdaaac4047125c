use actix_web::{
    HttpResponse, ResponseError,
    http::{
        Method, StatusCode,
        header::{self, HeaderValue},
    },
};
use serde::Serialize;

use super::helpers::error_chain_fmt;
use crate::domain::ValidationError;
use crate::notifier::{MessageId, NotifyError};

/// JSON body shared by every submission response.
#[derive(Serialize, Debug)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<MessageId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiResponse {
    pub fn sent(id: Option<MessageId>) -> Self {
        Self {
            success: true,
            message: Some("Sent successfully"),
            id,
            error: None,
            details: None,
        }
    }

    pub fn failure(error: String, details: Option<serde_json::Value>) -> Self {
        Self {
            success: false,
            message: None,
            id: None,
            error: Some(error),
            details,
        }
    }
}

#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Notify(#[from] NotifyError),
    #[error("Method Not Allowed")]
    UnsupportedMethod { allowed: Method },
    #[error("Malformed JSON body: {0}")]
    MalformedJson(#[source] serde_json::Error),
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("{reason}")]
    UnreadableBody { status: StatusCode, reason: String },
}

impl SubmissionError {
    /// Keeps the extractor's status (e.g. 413 for an oversized body) but
    /// answers with the usual JSON shape.
    pub fn unreadable_body(e: actix_web::Error) -> Self {
        SubmissionError::UnreadableBody {
            status: e.as_response_error().status_code(),
            reason: e.to_string(),
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionError::Validation(_) => "validation",
            SubmissionError::Notify(NotifyError::Configuration) => "configuration",
            SubmissionError::Notify(NotifyError::Delivery(_)) => "delivery",
            SubmissionError::UnsupportedMethod { .. } => "unsupported_method",
            SubmissionError::MalformedJson(_) | SubmissionError::NotAnObject => "malformed_body",
            SubmissionError::UnreadableBody { .. } => "unreadable_body",
        }
    }
}

impl std::fmt::Debug for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for SubmissionError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmissionError::Validation(_) => StatusCode::BAD_REQUEST,
            SubmissionError::UnsupportedMethod { .. } => StatusCode::METHOD_NOT_ALLOWED,
            SubmissionError::UnreadableBody { status, .. } => *status,
            SubmissionError::Notify(_)
            | SubmissionError::MalformedJson(_)
            | SubmissionError::NotAnObject => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        let details = match self {
            SubmissionError::Validation(e) => serde_json::to_value(e.violations()).ok(),
            SubmissionError::Notify(NotifyError::Delivery(e)) => Some(e.details()),
            _ => None,
        };

        let mut response = HttpResponse::build(self.status_code())
            .json(ApiResponse::failure(self.to_string(), details));

        if let SubmissionError::UnsupportedMethod { allowed } = self {
            if let Ok(value) = HeaderValue::from_str(allowed.as_str()) {
                response.headers_mut().insert(header::ALLOW, value);
            }
        }

        response
    }
}
