use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GrowthPoint {
    pub name: String,
    pub users: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformPoint {
    pub name: String,
    pub shares: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TrendingHashtag {
    pub tag: String,
    pub count: i64,
}

/// Payload of `GET /api/admin/stats`: headline counters plus the chart
/// series behind the overview page.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewStats {
    pub total_users: i64,
    pub total_uposts: i64,
    pub total_ublasts: i64,
    pub total_ublast_shares: i64,
    pub total_active_users: i64,
    pub ublast_share_percent: f64,
    pub ublast_shared_count: i64,
    pub ublast_share_target: i64,
    pub growth_data: Vec<GrowthPoint>,
    pub platform_data: Vec<PlatformPoint>,
    pub trending_hashtags: Vec<TrendingHashtag>,
}
