//! Query builder for the trending overview, which paginates three ranking
//! tiers independently in a single request.

use url::Url;

use super::common::Query;

/// Query builder for `GET /api/admin/trending/overview`.
#[derive(Clone, Copy)]
pub struct TrendingOverviewQuery {
    pub top_page: i64,
    pub manual_page: i64,
    pub organic_page: i64,
}

impl Default for TrendingOverviewQuery {
    fn default() -> Self {
        Self {
            top_page: 1,
            manual_page: 1,
            organic_page: 1,
        }
    }
}

impl TrendingOverviewQuery {
    pub fn with_top_page(mut self, page: i64) -> Self {
        self.top_page = page;
        self
    }

    pub fn with_manual_page(mut self, page: i64) -> Self {
        self.manual_page = page;
        self
    }

    pub fn with_organic_page(mut self, page: i64) -> Self {
        self.organic_page = page;
        self
    }
}

impl Query for TrendingOverviewQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("topPage", &self.top_page.to_string())
            .append_pair("manualPage", &self.manual_page.to_string())
            .append_pair("organicPage", &self.organic_page.to_string());
        url
    }
}
