//! Async client for the Postmark transactional email HTTP API.
//!
//! [`Client`] holds the two Postmark credential tokens and exposes typed
//! endpoint methods plus a generic [`Client::request`] for any other
//! endpoint. All calls are async and require a Tokio runtime.

mod client;
mod errors;
pub mod types;

pub use self::client::Client;
pub use self::errors::Error;
pub use reqwest::Method;
