//! Support slice: the inbox thread list and the transcript of the active
//! thread, each with its own cursor.

use unap_admin_api::types::{MessagesPage, SupportMessage, SupportThread, ThreadsPage};
use unap_admin_api::{AdminClient, PageQuery, PagedQuery};

use crate::error::OpError;

use super::paged::{PagedCollection, RequestState};

#[derive(Default)]
pub struct SupportSlice {
    pub threads: PagedCollection<SupportThread>,
    pub threads_request: RequestState,
    pub active_thread: Option<String>,
    pub messages: PagedCollection<SupportMessage>,
    pub messages_request: RequestState,
}

impl SupportSlice {
    /// Loads a thread page. If nothing is open yet, the first thread of the
    /// page becomes the active one.
    pub async fn fetch_threads(&mut self, client: &AdminClient, limit: i64) {
        self.threads_request.begin();
        let query = PageQuery::default()
            .with_page(self.threads.page)
            .with_limit(limit);
        match client.get_support_threads(&query).await {
            Ok(envelope) if envelope.ok => {
                let page: ThreadsPage = envelope.decode();
                self.threads.apply(page.threads, page.page, page.total_pages);
                if self.active_thread.is_none() {
                    self.active_thread = self.threads.items.first().map(|t| t.id.clone());
                }
                self.threads_request.succeed();
            }
            Ok(envelope) => self
                .threads_request
                .fail(envelope.error_message("Failed to load threads.")),
            Err(_) => self.threads_request.fail("Failed to load threads."),
        }
    }

    /// Opening a different thread starts its transcript from the first page.
    pub fn set_active_thread(&mut self, thread_id: &str) {
        if self.active_thread.as_deref() == Some(thread_id) {
            return;
        }
        self.active_thread = Some(thread_id.to_string());
        self.messages = PagedCollection::default();
        self.messages_request.clear_error();
    }

    pub async fn fetch_messages(&mut self, client: &AdminClient, limit: i64) {
        let Some(thread_id) = self.active_thread.clone() else {
            return;
        };
        self.messages_request.begin();
        let query = PageQuery::default()
            .with_page(self.messages.page)
            .with_limit(limit);
        match client.get_thread_messages(&thread_id, &query).await {
            Ok(envelope) if envelope.ok => {
                let page: MessagesPage = envelope.decode();
                self.messages
                    .apply(page.messages, page.page, page.total_pages);
                self.messages_request.succeed();
            }
            Ok(envelope) => self
                .messages_request
                .fail(envelope.error_message("Failed to load messages.")),
            Err(_) => self.messages_request.fail("Failed to load messages."),
        }
    }

    /// Opens or closes a thread and patches the cached row.
    pub async fn set_status(
        &mut self,
        client: &AdminClient,
        thread_id: &str,
        status: &str,
    ) -> Result<(), OpError> {
        let envelope = client
            .set_thread_status(thread_id, status)
            .await
            .map_err(|_| OpError::Transport)?;
        if !envelope.ok {
            return Err(OpError::from_envelope(&envelope, "Failed to update thread."));
        }
        let status = status.to_string();
        self.threads
            .patch_row(thread_id, |thread| thread.status = status);
        Ok(())
    }

    /// Detaches every linked external account from the thread's user and
    /// patches the embedded user record.
    pub async fn clear_linked_accounts(
        &mut self,
        client: &AdminClient,
        thread_id: &str,
        user_id: &str,
    ) -> Result<(), OpError> {
        let envelope = client
            .clear_linked_accounts(user_id)
            .await
            .map_err(|_| OpError::Transport)?;
        if !envelope.ok {
            return Err(OpError::from_envelope(
                &envelope,
                "Failed to clear linked accounts.",
            ));
        }
        self.threads.patch_row(thread_id, |thread| {
            thread.user.linked_platforms = Vec::new();
            thread.user.linked_accounts = Vec::new();
        });
        Ok(())
    }
}
