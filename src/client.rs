//! HTTP client for the Postmark API.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    types::{ApiError, DeliveryStats, Email, EmailResponse},
    Error,
};

const SERVER_TOKEN_HEADER: &str = "X-Postmark-Server-Token";
const ACCOUNT_TOKEN_HEADER: &str = "X-Postmark-Account-Token";

/// HTTP client for the Postmark API.
///
/// Holds the server and account tokens and sends both on every request;
/// Postmark picks whichever the target endpoint requires. Tokens are not
/// validated at construction, and the client never retries.
pub struct Client {
    http: reqwest::Client,
    server_token: String,
    account_token: String,
    /// Base URL for the API. Defaults to `https://api.postmarkapp.com`.
    base_url: String,
}

impl Client {
    /// Creates a new client pointing at the production Postmark API.
    ///
    /// The server token lives on the Credentials tab of a Postmark server;
    /// the account token on the Account tab and is only visible to the
    /// account owner.
    pub fn new(server_token: &str, account_token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            server_token: server_token.to_string(),
            account_token: account_token.to_string(),
            base_url: "https://api.postmarkapp.com".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(server_token: &str, account_token: &str, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            server_token: server_token.to_string(),
            account_token: account_token.to_string(),
            base_url: base_url.to_string(),
        }
    }

    /// Returns the base URL this client sends requests to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}/{}", &self.base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    /// Sends `method` to `path` under the base URL and decodes the JSON
    /// response into `T`.
    ///
    /// When `payload` is `Some` it is serialized as the JSON request body;
    /// when `None` no body is sent. Both credential headers go out on every
    /// request. Non-success statuses become [`Error::Api`] when the body is
    /// a Postmark error payload, [`Error::HttpStatus`] otherwise.
    pub async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&B>,
    ) -> Result<T, Error>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.get_url(path)?;
        let mut req = self
            .http
            .request(method, url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(SERVER_TOKEN_HEADER, self.server_token.as_str())
            .header(ACCOUNT_TOKEN_HEADER, self.account_token.as_str());

        if let Some(payload) = payload {
            let body = serde_json::to_vec(payload).map_err(|e| {
                tracing::error!("Failed to serialize request payload: {}", e);
                Error::RequestFailed
            })?;
            req = req.body(body);
        }

        let resp = req.send().await.map_err(|e| {
            tracing::error!("Failed to reach the API: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&body) {
                tracing::error!(
                    "API rejected the request with code {}: {}",
                    api_error.error_code,
                    api_error.message
                );
                return Err(Error::Api {
                    error_code: api_error.error_code,
                    message: api_error.message,
                });
            }
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Sends a single email. Requires the server token.
    pub async fn send_email(&self, email: &Email) -> Result<EmailResponse, Error> {
        self.request(Method::POST, "email", Some(email)).await
    }

    /// Fetches the delivery statistics summary. Requires the server token.
    pub async fn get_delivery_stats(&self) -> Result<DeliveryStats, Error> {
        self.request::<(), DeliveryStats>(Method::GET, "deliverystats", None)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so the slice cannot split a multibyte
    // character.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
