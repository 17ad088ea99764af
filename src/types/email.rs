use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single outbound email for the `/email` endpoint.
///
/// `from` and `to` are required by Postmark; everything else is optional
/// and omitted from the request body when unset. Multiple recipients are
/// comma-separated within the `to`, `cc`, and `bcc` strings.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Email {
    pub from: String,

    pub to: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Categorization tag, shown in the Postmark activity views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_body: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,

    pub track_opens: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

/// A custom header attached to an outbound email.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// An attachment on an outbound email. `content` is base64-encoded.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct Attachment {
    pub name: String,

    pub content: String,

    pub content_type: String,
}

/// Postmark's response to a send request.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct EmailResponse {
    pub to: String,

    pub submitted_at: DateTime<Utc>,

    #[serde(rename = "MessageID")]
    pub message_id: String,

    /// 0 on success. Non-zero codes match the Postmark error-code table.
    pub error_code: i64,

    pub message: String,
}
