//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (URL construction, serialization, network
    /// error, or an unreadable/undecodable response). Details are logged
    /// at the failure site.
    #[error("Request failed")]
    RequestFailed,
    /// Postmark rejected the request with a structured error payload.
    #[error("Postmark error {error_code}: {message}")]
    Api { error_code: i64, message: String },
    /// The API returned a non-success status whose body is not a Postmark
    /// error payload. Carries a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}
