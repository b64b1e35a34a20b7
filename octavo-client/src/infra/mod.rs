//! Infrastructure: the HTTP gateway, configuration, and test scaffolding.

pub mod api_client;
pub mod api_types;
pub mod config;
pub mod constants;
pub mod services;
pub mod testing;

pub use api_client::ApiClient;
pub use config::ClientConfig;
