use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionAuthor {
    pub name: String,
    pub username: String,
    pub avatar: String,
}

/// A user-proposed blast or proof-of-share awaiting review.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Submission {
    #[serde(alias = "_id")]
    pub id: String,

    pub user_id: String,

    pub user: SubmissionAuthor,

    pub blast_id: String,

    pub blast_title: String,

    pub content: String,

    pub attachments: Vec<String>,

    pub status: String,

    pub submitted_at: String,

    pub proposed_date: Option<String>,

    /// Set once an approval materializes the proposal as a real blast.
    pub approved_ublast_id: Option<String>,

    pub review_notes: Option<String>,

    pub reviewed_by: Option<String>,

    pub reviewed_at: Option<String>,
}

/// Payload of `GET /api/admin/ublasts/submissions`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SubmissionsPage {
    pub submissions: Vec<Submission>,
    pub page: i64,
    pub total_pages: i64,
}
