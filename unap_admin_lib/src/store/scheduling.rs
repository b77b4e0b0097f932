//! Scheduling slice: the blast calendar plus pending proposals.
//!
//! Blasts and pending submissions load together; the blast list is
//! required while the submissions list is optional and simply stays empty
//! when its call fails. Every blast mutation here can shift sort order or
//! page boundaries, so each one refetches the current pages rather than
//! patching in place.

use unap_admin_api::types::{AdminUser, BlastDraft, BlastsPage, Submission, SubmissionsPage, UBlast, UsersPage};
use unap_admin_api::{
    AdminClient, PageQuery, PagedQuery, SubmissionListQuery, SubmissionStatus, UserListQuery,
};

use crate::error::OpError;
use crate::validation::require;

use super::paged::{PagedCollection, RequestState};

const ELIGIBLE_USERS_LIMIT: i64 = 200;

#[derive(Default)]
pub struct SchedulingSlice {
    pub blasts: PagedCollection<UBlast>,
    pub submissions: PagedCollection<Submission>,
    /// Dropdown source for reward/offer assignment. Optional: a failed
    /// fetch leaves it empty instead of failing the page.
    pub eligible_users: Vec<AdminUser>,
    pub request: RequestState,
}

impl SchedulingSlice {
    pub async fn fetch(&mut self, client: &AdminClient, blasts_limit: i64, submissions_limit: i64) {
        self.request.begin();
        let blasts_query = PageQuery::default()
            .with_page(self.blasts.page)
            .with_limit(blasts_limit);
        let submissions_query = SubmissionListQuery::default()
            .with_status(SubmissionStatus::Pending)
            .with_page(self.submissions.page)
            .with_limit(submissions_limit);

        let (blasts_result, submissions_result) = tokio::join!(
            client.get_blasts(&blasts_query),
            client.get_submissions(&submissions_query),
        );

        let blasts_env = match blasts_result {
            Ok(envelope) if envelope.ok => envelope,
            Ok(envelope) => {
                self.request
                    .fail(envelope.error_message("Failed to load blasts."));
                return;
            }
            Err(_) => {
                self.request.fail("Failed to load blasts.");
                return;
            }
        };

        let page: BlastsPage = blasts_env.decode();
        // Reward grants are managed from the users page, not the calendar.
        let visible = page
            .ublasts
            .into_iter()
            .filter(|blast| blast.reward_type.as_deref() != Some("reward"))
            .collect();
        self.blasts.apply(visible, page.page, page.total_pages);

        match submissions_result {
            Ok(envelope) if envelope.ok => {
                let page: SubmissionsPage = envelope.decode();
                self.submissions
                    .apply(page.submissions, page.page, page.total_pages);
            }
            _ => self.submissions.apply(Vec::new(), self.submissions.page, 1),
        }

        self.request.succeed();
    }

    pub async fn fetch_eligible_users(&mut self, client: &AdminClient) {
        let query = UserListQuery::default().with_limit(ELIGIBLE_USERS_LIMIT);
        match client.get_users(&query).await {
            Ok(envelope) if envelope.ok => {
                let page: UsersPage = envelope.decode();
                self.eligible_users = page.users;
            }
            _ => tracing::warn!("Eligible user list fetch failed; dropdown stays empty"),
        }
    }

    pub async fn create_blast(
        &mut self,
        client: &AdminClient,
        draft: BlastDraft,
        blasts_limit: i64,
        submissions_limit: i64,
    ) -> Result<(), OpError> {
        require(
            draft.title.as_deref().unwrap_or(""),
            "Blast title is required.",
        )?;
        let envelope = client
            .create_blast(draft)
            .await
            .map_err(|_| OpError::Transport)?;
        if !envelope.ok {
            return Err(OpError::from_envelope(&envelope, "Failed to create blast."));
        }
        self.fetch(client, blasts_limit, submissions_limit).await;
        Ok(())
    }

    pub async fn update_blast(
        &mut self,
        client: &AdminClient,
        blast_id: &str,
        draft: BlastDraft,
        blasts_limit: i64,
        submissions_limit: i64,
    ) -> Result<(), OpError> {
        let envelope = client
            .update_blast(blast_id, draft)
            .await
            .map_err(|_| OpError::Transport)?;
        if !envelope.ok {
            return Err(OpError::from_envelope(&envelope, "Failed to update blast."));
        }
        self.fetch(client, blasts_limit, submissions_limit).await;
        Ok(())
    }

    pub async fn delete_blast(
        &mut self,
        client: &AdminClient,
        blast_id: &str,
        blasts_limit: i64,
        submissions_limit: i64,
    ) -> Result<(), OpError> {
        let envelope = client
            .delete_blast(blast_id)
            .await
            .map_err(|_| OpError::Transport)?;
        if !envelope.ok {
            return Err(OpError::from_envelope(&envelope, "Failed to delete blast."));
        }
        self.fetch(client, blasts_limit, submissions_limit).await;
        Ok(())
    }

    pub async fn release_blast(
        &mut self,
        client: &AdminClient,
        blast_id: &str,
        blasts_limit: i64,
        submissions_limit: i64,
    ) -> Result<(), OpError> {
        let envelope = client
            .release_blast(blast_id)
            .await
            .map_err(|_| OpError::Transport)?;
        if !envelope.ok {
            return Err(OpError::from_envelope(&envelope, "Failed to release blast."));
        }
        self.fetch(client, blasts_limit, submissions_limit).await;
        Ok(())
    }

    /// Assigns an existing blast to a user as a reward or a priced offer.
    /// Leaves the calendar untouched.
    pub async fn assign_blast(
        &self,
        client: &AdminClient,
        blast_id: &str,
        user_id: &str,
        price_dollars: Option<f64>,
    ) -> Result<(), OpError> {
        require(user_id, "Select a user.")?;
        let envelope = match price_dollars {
            None => client
                .reward_blast(blast_id, user_id)
                .await
                .map_err(|_| OpError::Transport)?,
            Some(price) => client
                .offer_blast(blast_id, user_id, price, "usd")
                .await
                .map_err(|_| OpError::Transport)?,
        };
        if !envelope.ok {
            return Err(OpError::from_envelope(&envelope, "Failed to send reward."));
        }
        Ok(())
    }
}
