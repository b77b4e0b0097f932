use serde::{Deserialize, Serialize};

/// An entry in the moderation audit trail.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ModerationAction {
    #[serde(alias = "_id")]
    pub id: String,

    #[serde(rename = "type")]
    pub action_type: String,

    pub target_type: String,

    pub target_id: String,

    pub target_name: Option<String>,

    pub target_email: Option<String>,

    pub performed_by: String,

    pub performed_at: String,

    pub reason: Option<String>,

    pub notes: Option<String>,
}

/// Payload of `GET /api/admin/moderation/actions`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionsPage {
    pub actions: Vec<ModerationAction>,
    pub page: i64,
    pub total_pages: i64,
}
