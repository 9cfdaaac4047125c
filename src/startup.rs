use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::notifier::Notifier;
use crate::routes::{method_not_allowed, request_appointment, send_contact_inquiry};

/// Submissions are a handful of short fields.
const MAX_BODY_BYTES: usize = 64 * 1024;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let email_client = config.email_client.client()?;
        let recipients = config.notifications.recipients()?;

        let notifier = Notifier::new(
            Arc::new(email_client),
            config.email_client.api_key,
            recipients,
        );
        if !notifier.has_api_key() {
            tracing::warn!("No email provider API key configured; submissions will be refused");
        }

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {address}"))?;
        let port = listener.local_addr()?.port();
        let server = run(listener, notifier)?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, notifier: Notifier) -> Result<Server, anyhow::Error> {
    let notifier = web::Data::new(notifier);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .service(
                web::resource("/appointments")
                    .route(web::post().to(request_appointment))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/contact")
                    .route(web::post().to(send_contact_inquiry))
                    .default_service(web::to(method_not_allowed)),
            )
            .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
            .app_data(notifier.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
