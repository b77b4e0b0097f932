use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PostAuthor {
    pub name: String,
    pub avatar: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PostStats {
    pub views: i64,
    pub likes: i64,
    pub comments: i64,
    pub saves: i64,
    pub shares: i64,
}

/// A user post.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    #[serde(alias = "_id")]
    pub id: String,

    pub user_id: String,

    pub user: PostAuthor,

    #[serde(rename = "type")]
    pub post_type: String,

    pub content: String,

    pub thumbnail: Option<String>,

    pub hashtags: Vec<String>,

    pub platforms: Vec<String>,

    pub stats: PostStats,

    pub status: String,

    pub created_at: String,

    pub is_unap_blast: bool,

    pub trending_section: Option<String>,

    pub trending_position: Option<i64>,
}

/// Payload of `GET /api/admin/posts`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PostsPage {
    pub posts: Vec<Post>,
    pub page: i64,
    pub total_pages: i64,
}
