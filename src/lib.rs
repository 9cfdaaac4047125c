pub mod configuration;
pub mod domain;
pub mod email_client;
pub mod notifier;
pub mod presenter;
pub mod routes;
pub mod startup;
pub mod telemetry;
