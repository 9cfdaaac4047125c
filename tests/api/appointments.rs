use wiremock::{
    Mock, ResponseTemplate,
    matchers::{any, method, path},
};

use crate::helpers::{spawn_app, spawn_app_with, valid_appointment};

#[tokio::test]
async fn appointments_rejects_other_methods_with_405() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for verb in [
        reqwest::Method::GET,
        reqwest::Method::PUT,
        reqwest::Method::DELETE,
    ] {
        let response = app.request(verb.clone(), "/appointments").await;

        assert_eq!(405, response.status().as_u16(), "{verb} was not rejected");
        assert_eq!(response.headers()["Allow"], "POST");
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "error": "Method Not Allowed" })
        );
    }
}

#[tokio::test]
async fn appointments_returns_200_for_a_valid_request() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "msg_9" })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_appointment(&valid_appointment()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["id"], "msg_9");
}

#[tokio::test]
async fn appointments_omits_the_id_when_the_provider_sends_none() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_appointment(&valid_appointment()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "success": true, "message": "Sent successfully" })
    );
}

#[tokio::test]
async fn appointment_email_uses_display_labels() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "msg_1" })))
        .mount(&app.email_server)
        .await;

    app.post_appointment(&valid_appointment()).await;

    let email = app.sent_email().await;
    let html = email["html"].as_str().unwrap();
    assert_eq!(email["subject"], "New Appointment: Jo Lee");
    assert!(html.contains("Evening (3:00 PM - 6:00 PM)"));
    assert!(html.contains("Physiotherapy &amp; Rehabilitation"));
    assert!(html.contains("Monday, 1 January 2024"));
    assert!(!html.contains("Reason"));
}

#[tokio::test]
async fn appointment_reason_is_embedded_as_text() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "msg_1" })))
        .mount(&app.email_server)
        .await;

    let mut body = valid_appointment();
    body["reason"] = serde_json::json!("<script>alert('x')</script>");
    app.post_appointment(&body).await;

    let email = app.sent_email().await;
    let html = email["html"].as_str().unwrap();
    assert!(html.contains("<strong>Reason:</strong>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<script>"));
}

#[tokio::test]
async fn appointments_returns_400_for_an_unknown_time_slot() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let mut body = valid_appointment();
    body["preferredTime"] = serde_json::json!("night");

    let response = app.post_appointment(&body).await;

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["details"][0]["field"], "preferredTime");
}

#[tokio::test]
async fn recipient_override_wins_over_configured_addresses() {
    let app = spawn_app_with(|c| {
        c.notifications.appointments_recipient = Some("bookings@clinic.test".into());
        c.notifications.recipient_override = Some("on-call@clinic.test".into());
    })
    .await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "msg_1" })))
        .mount(&app.email_server)
        .await;

    app.post_appointment(&valid_appointment()).await;

    let email = app.sent_email().await;
    assert_eq!(email["to"], serde_json::json!(["on-call@clinic.test"]));
}

#[tokio::test]
async fn appointments_recipient_is_used_without_an_override() {
    let app = spawn_app_with(|c| {
        c.notifications.appointments_recipient = Some("bookings@clinic.test".into());
    })
    .await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "msg_1" })))
        .mount(&app.email_server)
        .await;

    app.post_appointment(&valid_appointment()).await;

    let email = app.sent_email().await;
    assert_eq!(email["to"], serde_json::json!(["bookings@clinic.test"]));
}
