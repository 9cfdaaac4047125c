use serde_json::{Map, Value};

use super::text::min_length;
use super::validation::FormFields;
use super::{EmailAddress, PersonName, PhoneNumber, TimeSlot, ValidationError};

/// A booking request that passed every field check.
#[derive(Debug, Clone)]
pub struct AppointmentRequest {
    pub full_name: PersonName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub preferred_date: String,
    pub preferred_time: TimeSlot,
    pub service: String,
    pub reason: Option<String>,
}

impl AppointmentRequest {
    pub fn parse(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut fields = FormFields::new(body);

        let full_name = fields.required("fullName", PersonName::parse);
        let email = fields.required("email", EmailAddress::parse);
        let phone = fields.required("phone", PhoneNumber::parse);
        let preferred_date = fields.required("preferredDate", |v| min_length(v, 1));
        let preferred_time = fields.required("preferredTime", TimeSlot::parse);
        let service = fields.required("service", |v| min_length(v, 1));
        let reason = fields.optional("reason", Ok);

        match (
            full_name,
            email,
            phone,
            preferred_date,
            preferred_time,
            service,
            reason,
        ) {
            (
                Some(full_name),
                Some(email),
                Some(phone),
                Some(preferred_date),
                Some(preferred_time),
                Some(service),
                Some(reason),
            ) => Ok(Self {
                full_name,
                email,
                phone,
                preferred_date,
                preferred_time,
                service,
                reason,
            }),
            _ => Err(fields.into_error()),
        }
    }
}
