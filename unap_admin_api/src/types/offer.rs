use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OfferParty {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OfferBlastRef {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
}

/// A priced blast grant extended to a user.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Offer {
    #[serde(alias = "_id")]
    pub id: String,

    pub ublast: OfferBlastRef,

    pub user: OfferParty,

    pub price_cents: i64,

    pub currency: String,

    /// `pending`, `paid`, `cancelled`, or `expired`.
    pub status: String,

    pub created_at: String,
}

/// A blast granted to a user for free.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RewardedUBlast {
    #[serde(alias = "_id")]
    pub id: String,

    pub title: String,

    pub reward_label: String,

    pub user: OfferParty,

    pub status: String,

    pub expires_at: Option<String>,
}

/// Payload of `GET /api/admin/ublast-offers`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct OffersPage {
    pub offers: Vec<Offer>,
    pub page: i64,
    pub total_pages: i64,
}

/// Payload of `GET /api/admin/rewarded-ublasts`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RewardedPage {
    pub rewarded: Vec<RewardedUBlast>,
    pub page: i64,
    pub total_pages: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OfferStatusCounts {
    pub pending: i64,
    pub paid: i64,
    pub cancelled: i64,
    pub expired: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PerBlastEarnings {
    pub ublast_id: String,
    pub title: String,
    pub earnings_cents: i64,
}

/// Payload of `GET /api/admin/ublast-offers/summary`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OffersSummary {
    pub total_earnings_cents: i64,
    pub status_counts: OfferStatusCounts,
    pub per_ublast: Vec<PerBlastEarnings>,
}
