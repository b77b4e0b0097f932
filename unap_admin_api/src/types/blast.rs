use serde::{Deserialize, Serialize};

/// A promotional broadcast (UBlast).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UBlast {
    #[serde(alias = "_id")]
    pub id: String,

    pub title: String,

    pub content: String,

    pub media_url: Option<String>,

    pub scheduled_for: Option<String>,

    pub status: String,

    pub created_at: String,

    pub created_by: Option<String>,

    /// `"reward"` marks blasts granted to users; those are hidden from the
    /// scheduling list.
    pub reward_type: Option<String>,
}

/// Payload of `GET /api/admin/ublasts` and `GET /api/admin/official-posts`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BlastsPage {
    pub ublasts: Vec<UBlast>,
    pub page: i64,
    pub total_pages: i64,
}

/// Payload of a blast create/update response.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BlastResponse {
    pub ublast: UBlast,
}

/// Draft fields for the multipart create/update blast form.
///
/// Only set fields are appended, so a draft holding nothing but a title
/// produces a multipart body with a single `title` part.
#[derive(Debug, Clone, Default)]
pub struct BlastDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub scheduled_for: Option<String>,
    /// Attachment as `(file name, bytes)`.
    pub media: Option<(String, Vec<u8>)>,
}

impl BlastDraft {
    pub fn into_form(self) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();
        if let Some(title) = self.title {
            form = form.text("title", title);
        }
        if let Some(content) = self.content {
            form = form.text("content", content);
        }
        if let Some(scheduled_for) = self.scheduled_for {
            form = form.text("scheduledFor", scheduled_for);
        }
        if let Some((file_name, bytes)) = self.media {
            form = form.part(
                "media",
                reqwest::multipart::Part::bytes(bytes).file_name(file_name),
            );
        }
        form
    }
}
