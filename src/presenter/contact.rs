use crate::domain::ContactRequest;

use super::{Notification, escape_multiline, html_field, subject_line, text_field};

pub fn contact_email(request: &ContactRequest) -> Notification {
    let rows: [(&str, &str); 4] = [
        ("Name", request.name.as_ref()),
        ("Email", request.email.as_ref()),
        ("Phone", request.phone.as_ref()),
        ("Subject", request.subject.as_str()),
    ];

    let mut html = String::from("<h2>New Contact Form Submission</h2>\n");
    let mut text = String::from("New Contact Form Submission\n\n");
    for (label, value) in rows {
        html.push_str(&html_field(label, value));
        text.push_str(&text_field(label, value));
    }

    html.push_str(&format!(
        "<p><strong>Message:</strong></p>\n<p>{}</p>\n",
        escape_multiline(&request.message)
    ));
    text.push_str(&format!("\nMessage:\n{}\n", request.message));

    Notification {
        subject: subject_line(&format!("Contact: {}", request.subject)),
        html,
        text,
    }
}
