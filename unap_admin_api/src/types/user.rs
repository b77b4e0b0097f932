use serde::{Deserialize, Serialize};

/// A platform user as seen by admin endpoints.
///
/// Every field defaults so a partial server payload still yields a row; the
/// canonical copy lives server-side and this is only a projection.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminUser {
    #[serde(alias = "_id")]
    pub id: String,

    pub name: String,

    pub username: String,

    pub email: String,

    pub phone: String,

    pub avatar: String,

    pub followers: i64,

    pub total_posts: i64,

    pub status: String,

    pub linked_platforms: Vec<String>,

    pub linked_accounts: Vec<serde_json::Value>,

    pub ublast_blocked: bool,

    pub ublast_blocked_until: Option<String>,

    pub offer_status: Option<String>,

    pub last_activity: String,

    pub joined_date: String,
}

/// Payload of `GET /api/admin/users`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct UsersPage {
    pub users: Vec<AdminUser>,
    pub page: i64,
    pub total_pages: i64,
    /// Recipient totals used by the communications page.
    pub total_count: i64,
    pub total_emails: i64,
    pub total_phones: i64,
}

/// Fields a restrict/unrestrict response may carry back for the row patch.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RestrictionUpdate {
    pub status: Option<String>,
    pub ublast_blocked: Option<bool>,
    pub ublast_blocked_until: Option<String>,
}
