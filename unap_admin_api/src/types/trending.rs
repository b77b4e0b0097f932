use serde::{Deserialize, Serialize};

/// An entry in one of the three trending tiers. Manual pins carry an
/// explicit ordinal `position`; organic rows carry an engagement score.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TrendingPlacement {
    #[serde(alias = "_id")]
    pub id: String,

    pub post_id: String,

    pub title: Option<String>,

    pub description: Option<String>,

    pub media_url: Option<String>,

    pub position: Option<i64>,

    pub score: Option<f64>,

    pub status: String,

    pub created_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TierMeta {
    pub page: i64,
    pub total_pages: i64,
}

impl Default for TierMeta {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 1,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TrendingMeta {
    pub top: TierMeta,
    pub manual: TierMeta,
    pub organic: TierMeta,
}

/// Payload of `GET /api/admin/trending/overview`: all three tiers plus
/// per-tier pagination in one response.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TrendingOverview {
    pub top: Vec<TrendingPlacement>,
    pub manual: Vec<TrendingPlacement>,
    pub organic: Vec<TrendingPlacement>,
    pub meta: TrendingMeta,
}
