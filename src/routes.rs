mod appointments;
mod contact;
mod errors;
mod helpers;
mod submission;

pub use appointments::request_appointment;
pub use contact::send_contact_inquiry;
pub use errors::{ApiResponse, SubmissionError};
pub use helpers::{error_chain_fmt, method_not_allowed};
