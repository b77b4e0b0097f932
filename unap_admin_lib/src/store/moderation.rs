//! Moderation slice: users, posts, and the action audit trail, each with
//! its own cursor and request state, plus bulk user selection.

use unap_admin_api::types::{
    ActionsPage, AdminUser, ModerationAction, Post, PostsPage, RestrictionUpdate, UsersPage,
};
use unap_admin_api::{AdminClient, PageQuery, PagedQuery, UserListQuery};

use crate::error::OpError;

use super::paged::{PagedCollection, RequestState, Selection};

#[derive(Default)]
pub struct ModerationSlice {
    pub users: PagedCollection<AdminUser>,
    pub users_request: RequestState,
    pub posts: PagedCollection<Post>,
    pub posts_request: RequestState,
    pub actions: PagedCollection<ModerationAction>,
    pub actions_request: RequestState,
    /// Bulk-delete selection over the users currently in view.
    pub selected_users: Selection,
}

impl ModerationSlice {
    /// Reloading the user page invalidates any selection referencing it.
    pub async fn fetch_users(&mut self, client: &AdminClient, limit: i64) {
        self.users_request.begin();
        let query = UserListQuery::default()
            .with_page(self.users.page)
            .with_limit(limit);
        match client.get_users(&query).await {
            Ok(envelope) if envelope.ok => {
                let page: UsersPage = envelope.decode();
                self.users.apply(page.users, page.page, page.total_pages);
                self.selected_users.clear();
                self.users_request.succeed();
            }
            Ok(envelope) => self
                .users_request
                .fail(envelope.error_message("Failed to load users.")),
            Err(_) => self.users_request.fail("Failed to load users."),
        }
    }

    pub async fn fetch_posts(&mut self, client: &AdminClient, limit: i64) {
        self.posts_request.begin();
        let query = PageQuery::default()
            .with_page(self.posts.page)
            .with_limit(limit);
        match client.get_posts(&query).await {
            Ok(envelope) if envelope.ok => {
                let page: PostsPage = envelope.decode();
                self.posts.apply(page.posts, page.page, page.total_pages);
                self.posts_request.succeed();
            }
            Ok(envelope) => self
                .posts_request
                .fail(envelope.error_message("Failed to load posts.")),
            Err(_) => self.posts_request.fail("Failed to load posts."),
        }
    }

    pub async fn fetch_actions(&mut self, client: &AdminClient, limit: i64) {
        self.actions_request.begin();
        let query = PageQuery::default()
            .with_page(self.actions.page)
            .with_limit(limit);
        match client.get_moderation_actions(&query).await {
            Ok(envelope) if envelope.ok => {
                let page: ActionsPage = envelope.decode();
                self.actions.apply(page.actions, page.page, page.total_pages);
                self.actions_request.succeed();
            }
            Ok(envelope) => self
                .actions_request
                .fail(envelope.error_message("Failed to load actions.")),
            Err(_) => self.actions_request.fail("Failed to load actions."),
        }
    }

    /// Restricts a user and patches the cached row in place, so the list
    /// updates without a reload.
    pub async fn restrict_user(
        &mut self,
        client: &AdminClient,
        user_id: &str,
    ) -> Result<(), OpError> {
        let envelope = client
            .restrict_user(user_id)
            .await
            .map_err(|_| OpError::Transport)?;
        if !envelope.ok {
            return Err(OpError::from_envelope(&envelope, "Failed to update user."));
        }
        self.apply_restriction_update(user_id, envelope.decode());
        Ok(())
    }

    pub async fn unrestrict_user(
        &mut self,
        client: &AdminClient,
        user_id: &str,
    ) -> Result<(), OpError> {
        let envelope = client
            .unrestrict_user(user_id)
            .await
            .map_err(|_| OpError::Transport)?;
        if !envelope.ok {
            return Err(OpError::from_envelope(&envelope, "Failed to update user."));
        }
        self.apply_restriction_update(user_id, envelope.decode());
        Ok(())
    }

    /// Merges only the fields the server confirmed; anything it omitted
    /// keeps its cached value.
    fn apply_restriction_update(&mut self, user_id: &str, update: RestrictionUpdate) {
        self.users.patch_row(user_id, |user| {
            if let Some(status) = update.status {
                if !status.is_empty() {
                    user.status = status;
                }
            }
            if let Some(blocked) = update.ublast_blocked {
                user.ublast_blocked = blocked;
            }
            if let Some(until) = update.ublast_blocked_until {
                user.ublast_blocked_until = Some(until);
            }
        });
    }

    /// Deletes a post and removes exactly that row from the cached page.
    pub async fn delete_post(
        &mut self,
        client: &AdminClient,
        post_id: &str,
    ) -> Result<(), OpError> {
        let envelope = client
            .delete_post(post_id)
            .await
            .map_err(|_| OpError::Transport)?;
        if !envelope.ok {
            return Err(OpError::from_envelope(&envelope, "Failed to delete post."));
        }
        self.posts.remove_row(post_id);
        Ok(())
    }

    /// Deletes the selected users, drops their rows, and clears the
    /// selection.
    pub async fn delete_selected_users(&mut self, client: &AdminClient) -> Result<(), OpError> {
        let user_ids = self.selected_users.ids();
        if user_ids.is_empty() {
            return Err(OpError::Validation("Select at least one user.".to_string()));
        }
        let envelope = client
            .delete_users(&user_ids)
            .await
            .map_err(|_| OpError::Transport)?;
        if !envelope.ok {
            return Err(OpError::from_envelope(&envelope, "Failed to delete users."));
        }
        self.users.remove_rows(&user_ids);
        self.selected_users.clear();
        Ok(())
    }
}
