use crate::domain::AppointmentRequest;

use super::labels::{service_label, time_slot_label};
use super::{Notification, escape_multiline, format_date, html_field, subject_line, text_field};

pub fn appointment_email(request: &AppointmentRequest) -> Notification {
    let date = format_date(&request.preferred_date);
    let time = time_slot_label(request.preferred_time);
    let service = service_label(&request.service);

    let rows: [(&str, &str); 6] = [
        ("Name", request.full_name.as_ref()),
        ("Email", request.email.as_ref()),
        ("Phone", request.phone.as_ref()),
        ("Date", date.as_str()),
        ("Time", time),
        ("Service", service),
    ];

    let mut html = String::from("<h2>New Appointment Request</h2>\n");
    let mut text = String::from("New Appointment Request\n\n");
    for (label, value) in rows {
        html.push_str(&html_field(label, value));
        text.push_str(&text_field(label, value));
    }

    if let Some(reason) = &request.reason {
        html.push_str(&format!(
            "<p><strong>Reason:</strong></p>\n<p>{}</p>\n",
            escape_multiline(reason)
        ));
        text.push_str(&format!("\nReason:\n{reason}\n"));
    }

    Notification {
        subject: subject_line(&format!("New Appointment: {}", request.full_name.as_ref())),
        html,
        text,
    }
}
