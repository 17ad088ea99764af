use serde::{Deserialize, Serialize};

/// Summary returned by the `/deliverystats` endpoint.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct DeliveryStats {
    /// Number of recipients deactivated by hard bounces or spam complaints.
    pub inactive_mails: i64,

    pub bounces: Vec<BounceCount>,
}

/// Per-category bounce tally. The aggregate "All" entry carries no type.
#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct BounceCount {
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub bounce_type: Option<String>,

    pub name: String,

    pub count: i64,
}
