mod appointment_request;
mod contact_request;
mod email_address;
mod text;
mod time_slot;
mod validation;

pub use appointment_request::AppointmentRequest;
pub use contact_request::ContactRequest;
pub use email_address::EmailAddress;
pub use text::{PersonName, PhoneNumber};
pub use time_slot::TimeSlot;
pub use validation::{FieldViolation, ValidationError};
