use clinic_intake::{
    configuration::{Settings, get_configuration},
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;
use secrecy::SecretString;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_appointment(&self, body: &serde_json::Value) -> reqwest::Response {
        self.post_json("/appointments", body).await
    }

    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.post_json("/contact", body).await
    }

    pub async fn post_raw(&self, path: &str, body: impl Into<reqwest::Body>) -> reqwest::Response {
        self.api_client
            .post(format!("{}{path}", self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn request(&self, method: reqwest::Method, path: &str) -> reqwest::Response {
        self.api_client
            .request(method, format!("{}{path}", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// The JSON body of the only email the provider received.
    pub async fn sent_email(&self) -> serde_json::Value {
        let requests = self.email_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1, "Expected exactly one email to be sent");
        serde_json::from_slice(&requests[0].body).unwrap()
    }

    async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}{path}", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| {}).await
}

pub async fn spawn_app_with(customise: impl FnOnce(&mut Settings)) -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let mut config = get_configuration().expect("Failed to read configuration");
    config.application.host = "127.0.0.1".into();
    config.application.port = 0;
    config.email_client.base_url = email_server.uri();
    config.email_client.api_key = Some(SecretString::from("re_test_key"));
    config.email_client.timeout_ms = Some(2_000);
    config.notifications.fallback_recipient = "front-desk@clinic.test".into();
    config.notifications.recipient_override = None;
    config.notifications.appointments_recipient = None;
    config.notifications.contact_recipient = None;
    customise(&mut config);

    let app = Application::build(config)
        .await
        .expect("Failed to build application.");
    let address = format!("http://127.0.0.1:{}", app.get_port());
    let _ = tokio::spawn(app.run_until_stopped());

    TestApp {
        address,
        email_server,
        api_client: reqwest::Client::new(),
    }
}

pub fn valid_contact() -> serde_json::Value {
    serde_json::json!({
        "name": "Jo Lee",
        "email": "jo@example.com",
        "phone": "9998887777",
        "subject": "Back pain",
        "message": "I have had lower back pain for two weeks."
    })
}

pub fn valid_appointment() -> serde_json::Value {
    serde_json::json!({
        "fullName": "Jo Lee",
        "email": "jo@example.com",
        "phone": "9998887777",
        "preferredDate": "2024-01-01",
        "preferredTime": "evening",
        "service": "physiotherapy"
    })
}
