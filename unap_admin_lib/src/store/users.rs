//! Users slice: the filtered user directory plus the rewarded/offers view.
//!
//! Three independently paginated sub-collections live here: the user list,
//! rewarded blasts, and offers. A page turn on one never refetches another.

use unap_admin_api::types::{
    AdminUser, BlastDraft, BlastResponse, Offer, OffersPage, OffersSummary, RewardedPage,
    RewardedUBlast, UsersPage,
};
use unap_admin_api::{AdminClient, PageQuery, PagedQuery, UserFilter, UserListQuery};

use crate::error::OpError;
use crate::validation::require;

use super::paged::{PagedCollection, RequestState};

const OFFERS_PAGE_LIMIT: i64 = 10;
const REWARDED_PAGE_LIMIT: i64 = 20;

/// What a grant is backed by: an already-created blast, or a draft created
/// on the fly before the grant is sent.
pub enum GrantBlast {
    Existing(String),
    New(BlastDraft),
}

pub enum GrantMode {
    Reward,
    Offer { price_dollars: f64 },
}

pub struct GrantForm {
    pub user_id: String,
    pub blast: GrantBlast,
    pub mode: GrantMode,
}

#[derive(Default)]
pub struct UsersSlice {
    pub filter: UserFilter,
    pub users: PagedCollection<AdminUser>,
    pub request: RequestState,
    pub offers_summary: OffersSummary,
    pub offers: PagedCollection<Offer>,
    pub rewarded: PagedCollection<RewardedUBlast>,
    pub rewarded_request: RequestState,
}

impl UsersSlice {
    /// Switching the filter resets the cursor to page 1 and clears the
    /// prior error.
    pub fn set_filter(&mut self, filter: UserFilter) {
        self.filter = filter;
        self.users.reset_cursor();
        self.request.clear_error();
    }

    pub async fn fetch_users(&mut self, client: &AdminClient, limit: i64) {
        self.request.begin();
        let query = UserListQuery::default()
            .with_filter(self.filter)
            .with_page(self.users.page)
            .with_limit(limit);
        match client.get_users(&query).await {
            Ok(envelope) if envelope.ok => {
                let page: UsersPage = envelope.decode();
                self.users.apply(page.users, page.page, page.total_pages);
                self.request.succeed();
            }
            Ok(envelope) => self
                .request
                .fail(envelope.error_message("Failed to load users.")),
            Err(_) => self.request.fail("Failed to load users."),
        }
    }

    pub async fn fetch_offers_summary(&mut self, client: &AdminClient) {
        match client.get_offers_summary().await {
            Ok(envelope) if envelope.ok => {
                self.offers_summary = envelope.decode();
            }
            Ok(envelope) => {
                tracing::warn!(
                    "Offers summary fetch failed: {}",
                    envelope.error_message("Failed to load offers summary.")
                );
            }
            Err(_) => tracing::warn!("Offers summary fetch failed"),
        }
    }

    /// Fetches the rewarded and offers sub-collections concurrently. Both
    /// are required; either failure fails the composite load.
    pub async fn fetch_rewarded_data(&mut self, client: &AdminClient) {
        self.rewarded_request.begin();
        let offers_query = PageQuery::default()
            .with_page(self.offers.page)
            .with_limit(OFFERS_PAGE_LIMIT);
        let rewarded_query = PageQuery::default()
            .with_page(self.rewarded.page)
            .with_limit(REWARDED_PAGE_LIMIT);

        let (offers_result, rewarded_result) = tokio::join!(
            client.get_offers(&offers_query),
            client.get_rewarded(&rewarded_query),
        );

        let offers_env = match offers_result {
            Ok(envelope) if envelope.ok => envelope,
            Ok(envelope) => {
                self.rewarded_request
                    .fail(envelope.error_message("Failed to load offers."));
                return;
            }
            Err(_) => {
                self.rewarded_request.fail("Failed to load offers.");
                return;
            }
        };
        let rewarded_env = match rewarded_result {
            Ok(envelope) if envelope.ok => envelope,
            Ok(envelope) => {
                self.rewarded_request
                    .fail(envelope.error_message("Failed to load rewarded ublasts."));
                return;
            }
            Err(_) => {
                self.rewarded_request.fail("Failed to load rewarded ublasts.");
                return;
            }
        };

        let offers: OffersPage = offers_env.decode();
        let rewarded: RewardedPage = rewarded_env.decode();
        self.offers.apply(offers.offers, offers.page, offers.total_pages);
        self.rewarded
            .apply(rewarded.rewarded, rewarded.page, rewarded.total_pages);
        self.rewarded_request.succeed();
    }

    /// Sends a reward or offer grant, creating the backing blast first when
    /// the form asked for a new one. The user list is left untouched; the
    /// rewarded view is refreshed by its next fetch.
    pub async fn send_grant(
        &mut self,
        client: &AdminClient,
        grant: GrantForm,
    ) -> Result<(), OpError> {
        let blast_id = match grant.blast {
            GrantBlast::Existing(id) => {
                require(&id, "Select an existing UBlast or create a new one.")?;
                id
            }
            GrantBlast::New(draft) => {
                require(
                    draft.title.as_deref().unwrap_or(""),
                    "Blast title is required.",
                )?;
                let envelope = client
                    .create_blast(draft)
                    .await
                    .map_err(|_| OpError::Transport)?;
                if !envelope.ok {
                    return Err(OpError::from_envelope(&envelope, "Failed to create UBlast."));
                }
                let created: BlastResponse = envelope.decode();
                if created.ublast.id.is_empty() {
                    return Err(OpError::Server("UBlast creation failed.".to_string()));
                }
                created.ublast.id
            }
        };

        let envelope = match grant.mode {
            GrantMode::Reward => client
                .reward_blast(&blast_id, &grant.user_id)
                .await
                .map_err(|_| OpError::Transport)?,
            GrantMode::Offer { price_dollars } => client
                .offer_blast(&blast_id, &grant.user_id, price_dollars, "usd")
                .await
                .map_err(|_| OpError::Transport)?,
        };
        if !envelope.ok {
            return Err(OpError::from_envelope(&envelope, "Failed to send reward."));
        }
        Ok(())
    }
}
