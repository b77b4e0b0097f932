//! Trending slice: three ranking tiers with independent cursors, plus the
//! blast and approved-submission side lists used by the pin picker.
//!
//! The overview call is required; the two side lists are optional and fail
//! silently into empty slots. Pin, unpin, and move all change server-side
//! ordering, so each refetches the overview rather than patching rows.

use unap_admin_api::types::{BlastsPage, Submission, SubmissionsPage, TrendingOverview, UBlast};
use unap_admin_api::{
    AdminClient, PageQuery, PagedQuery, SubmissionListQuery, SubmissionStatus,
    TrendingOverviewQuery,
};

use crate::error::OpError;

use super::paged::RequestState;

/// Manual pins occupy explicit ordinal slots.
pub const MANUAL_PIN_CAPACITY: i64 = 16;

const SIDE_LIST_LIMIT: i64 = 200;

#[derive(Default)]
pub struct TrendingSlice {
    pub overview: TrendingOverview,
    pub official_blasts: Vec<UBlast>,
    pub approved_submissions: Vec<Submission>,
    pub request: RequestState,
}

impl TrendingSlice {
    /// Cursor for refetching the same three tier pages currently shown.
    fn current_query(&self) -> TrendingOverviewQuery {
        TrendingOverviewQuery::default()
            .with_top_page(self.overview.meta.top.page)
            .with_manual_page(self.overview.meta.manual.page)
            .with_organic_page(self.overview.meta.organic.page)
    }

    pub async fn fetch(&mut self, client: &AdminClient, query: TrendingOverviewQuery) {
        self.request.begin();
        let blasts_query = PageQuery::default().with_limit(SIDE_LIST_LIMIT);
        let submissions_query = SubmissionListQuery::default()
            .with_status(SubmissionStatus::Approved)
            .with_limit(SIDE_LIST_LIMIT);

        let (overview_result, blasts_result, submissions_result) = tokio::join!(
            client.get_trending_overview(&query),
            client.get_blasts(&blasts_query),
            client.get_submissions(&submissions_query),
        );

        match overview_result {
            Ok(envelope) if envelope.ok => {
                self.overview = envelope.decode();
            }
            Ok(envelope) => {
                self.request
                    .fail(envelope.error_message("Failed to load trending overview."));
                return;
            }
            Err(_) => {
                self.request.fail("Failed to load trending overview.");
                return;
            }
        }

        if let Ok(envelope) = blasts_result {
            if envelope.ok {
                let page: BlastsPage = envelope.decode();
                self.official_blasts = page.ublasts;
            }
        }
        if let Ok(envelope) = submissions_result {
            if envelope.ok {
                let page: SubmissionsPage = envelope.decode();
                self.approved_submissions = page.submissions;
            }
        }

        self.request.succeed();
    }

    pub async fn refetch(&mut self, client: &AdminClient) {
        let query = self.current_query();
        self.fetch(client, query).await;
    }

    pub async fn pin(&mut self, client: &AdminClient, post_id: &str) -> Result<(), OpError> {
        let envelope = client
            .pin_trending(post_id)
            .await
            .map_err(|_| OpError::Transport)?;
        if !envelope.ok {
            return Err(OpError::from_envelope(&envelope, "Failed to pin post."));
        }
        self.refetch(client).await;
        Ok(())
    }

    pub async fn unpin(&mut self, client: &AdminClient, placement_id: &str) -> Result<(), OpError> {
        let envelope = client
            .unpin_trending(placement_id)
            .await
            .map_err(|_| OpError::Transport)?;
        if !envelope.ok {
            return Err(OpError::from_envelope(&envelope, "Failed to unpin post."));
        }
        self.refetch(client).await;
        Ok(())
    }

    /// Moves a manual pin to a new ordinal slot. Out-of-range positions are
    /// rejected before any request is issued.
    pub async fn move_pin(
        &mut self,
        client: &AdminClient,
        placement_id: &str,
        position: i64,
    ) -> Result<(), OpError> {
        if !(1..=MANUAL_PIN_CAPACITY).contains(&position) {
            return Err(OpError::Validation(format!(
                "Position must be between 1 and {}.",
                MANUAL_PIN_CAPACITY
            )));
        }
        let envelope = client
            .move_trending(placement_id, position)
            .await
            .map_err(|_| OpError::Transport)?;
        if !envelope.ok {
            return Err(OpError::from_envelope(&envelope, "Failed to move post."));
        }
        self.refetch(client).await;
        Ok(())
    }
}
