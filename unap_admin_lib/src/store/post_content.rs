//! Post-content slice: user posts and official blasts side by side, with
//! independent cursors.

use unap_admin_api::types::{BlastsPage, Post, PostsPage, UBlast};
use unap_admin_api::{AdminClient, PageQuery, PagedQuery};

use super::paged::{PagedCollection, RequestState};

#[derive(Default)]
pub struct PostContentSlice {
    pub user_posts: PagedCollection<Post>,
    pub official_posts: PagedCollection<UBlast>,
    /// Driven by the user-posts fetch; the official list merges silently.
    pub request: RequestState,
}

impl PostContentSlice {
    pub async fn fetch_user_posts(&mut self, client: &AdminClient, limit: i64) {
        self.request.begin();
        let query = PageQuery::default()
            .with_page(self.user_posts.page)
            .with_limit(limit);
        match client.get_posts(&query).await {
            Ok(envelope) if envelope.ok => {
                let page: PostsPage = envelope.decode();
                self.user_posts.apply(page.posts, page.page, page.total_pages);
                self.request.succeed();
            }
            Ok(envelope) => self
                .request
                .fail(envelope.error_message("Failed to load posts.")),
            Err(_) => self.request.fail("Failed to load posts."),
        }
    }

    pub async fn fetch_official_posts(&mut self, client: &AdminClient, limit: i64) {
        let query = PageQuery::default()
            .with_page(self.official_posts.page)
            .with_limit(limit);
        match client.get_official_posts(&query).await {
            Ok(envelope) if envelope.ok => {
                let page: BlastsPage = envelope.decode();
                self.official_posts
                    .apply(page.ublasts, page.page, page.total_pages);
            }
            _ => tracing::warn!("Official post fetch failed; keeping prior rows"),
        }
    }
}
