use serde_json::{Map, Value};

use super::text::min_length;
use super::validation::FormFields;
use super::{EmailAddress, PersonName, PhoneNumber, ValidationError};

#[derive(Debug, Clone)]
pub struct ContactRequest {
    pub name: PersonName,
    pub email: EmailAddress,
    pub phone: PhoneNumber,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    pub fn parse(body: &Map<String, Value>) -> Result<Self, ValidationError> {
        let mut fields = FormFields::new(body);

        let name = fields.required("name", PersonName::parse);
        let email = fields.required("email", EmailAddress::parse);
        let phone = fields.required("phone", PhoneNumber::parse);
        let subject = fields.required("subject", |v| min_length(v, 3));
        let message = fields.required("message", |v| min_length(v, 10));

        match (name, email, phone, subject, message) {
            (Some(name), Some(email), Some(phone), Some(subject), Some(message)) => Ok(Self {
                name,
                email,
                phone,
                subject,
                message,
            }),
            _ => Err(fields.into_error()),
        }
    }
}
