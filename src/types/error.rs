use serde::{Deserialize, Serialize};

/// Error payload returned by Postmark alongside a non-success status.
///
/// Error codes are documented at
/// <https://postmarkapp.com/developer/api/overview#error-codes>.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct ApiError {
    pub error_code: i64,
    pub message: String,
}
