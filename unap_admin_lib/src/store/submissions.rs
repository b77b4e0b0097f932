//! Submissions slice: the review queue, filterable by status.

use unap_admin_api::types::{Submission, SubmissionsPage};
use unap_admin_api::{AdminClient, PagedQuery, SubmissionListQuery, SubmissionStatus};

use crate::error::OpError;

use super::paged::{PagedCollection, RequestState};

#[derive(Default)]
pub struct SubmissionsSlice {
    /// `None` shows all statuses.
    pub status: Option<SubmissionStatus>,
    pub submissions: PagedCollection<Submission>,
    pub request: RequestState,
}

impl SubmissionsSlice {
    /// Switching the status tab resets the cursor and clears the prior
    /// error.
    pub fn set_status(&mut self, status: Option<SubmissionStatus>) {
        self.status = status;
        self.submissions.reset_cursor();
        self.request.clear_error();
    }

    pub async fn fetch(&mut self, client: &AdminClient, limit: i64) {
        self.request.begin();
        let mut query = SubmissionListQuery::default()
            .with_page(self.submissions.page)
            .with_limit(limit);
        if let Some(status) = self.status {
            query = query.with_status(status);
        }
        match client.get_submissions(&query).await {
            Ok(envelope) if envelope.ok => {
                let page: SubmissionsPage = envelope.decode();
                self.submissions
                    .apply(page.submissions, page.page, page.total_pages);
                self.request.succeed();
            }
            Ok(envelope) => self
                .request
                .fail(envelope.error_message("Failed to load submissions.")),
            Err(_) => self.request.fail("Failed to load submissions."),
        }
    }

    /// Approves or rejects a submission. Review can move the row between
    /// status tabs and materialize a blast, so the page is refetched.
    pub async fn review(
        &mut self,
        client: &AdminClient,
        submission_id: &str,
        decision: SubmissionStatus,
        notes: Option<&str>,
        limit: i64,
    ) -> Result<(), OpError> {
        if decision == SubmissionStatus::Pending {
            return Err(OpError::Validation(
                "A review must approve or reject.".to_string(),
            ));
        }
        let envelope = client
            .review_submission(submission_id, &decision.to_string(), notes)
            .await
            .map_err(|_| OpError::Transport)?;
        if !envelope.ok {
            return Err(OpError::from_envelope(
                &envelope,
                "Failed to update submission.",
            ));
        }
        self.fetch(client, limit).await;
        Ok(())
    }
}
