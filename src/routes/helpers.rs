use std::error::Error;

use actix_web::http::Method;

use super::errors::SubmissionError;

pub fn error_chain_fmt(e: &impl Error, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    writeln!(f, "{e}\n")?;
    let mut current = e.source();

    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{cause}")?;
        current = cause.source();
    }

    Ok(())
}

/// Fallback for every verb other than POST on the submission resources.
#[tracing::instrument(name = "Rejecting an unsupported method", skip_all, fields(method = %method))]
pub async fn method_not_allowed(method: Method) -> Result<actix_web::HttpResponse, SubmissionError> {
    tracing::warn!("Only POST is accepted here");
    Err(SubmissionError::UnsupportedMethod {
        allowed: Method::POST,
    })
}
