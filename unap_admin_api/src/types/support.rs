use serde::{Deserialize, Serialize};

use super::user::AdminUser;

/// A support conversation with one user.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportThread {
    #[serde(alias = "_id")]
    pub id: String,

    pub user_id: String,

    /// `pending` or `solved`.
    pub status: String,

    pub last_message_at: String,

    pub last_subject: String,

    pub user: AdminUser,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SupportMessage {
    #[serde(alias = "_id")]
    pub id: String,

    pub sender_id: String,

    pub text: String,

    pub timestamp: String,

    pub is_admin: bool,
}

/// Payload of `GET /api/admin/support/threads`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreadsPage {
    pub threads: Vec<SupportThread>,
    pub page: i64,
    pub total_pages: i64,
}

/// Payload of `GET /api/admin/support/threads/{id}/messages`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MessagesPage {
    pub messages: Vec<SupportMessage>,
    pub page: i64,
    pub total_pages: i64,
}
