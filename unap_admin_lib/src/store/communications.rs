//! Communications slice: mass email and SMS sends against the user roster.

use serde::Deserialize;
use unap_admin_api::types::{AdminUser, UsersPage};
use unap_admin_api::{AdminClient, PagedQuery, UserListQuery};

use crate::error::OpError;
use crate::validation::{require, require_recipients, RecipientFilter};

use super::paged::{PagedCollection, RequestState, Selection};

/// Delivery counts reported by the server after a send.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SendReport {
    pub sent: i64,
    pub failed: i64,
}

impl SendReport {
    pub fn summary(&self) -> String {
        format!("Sent {}. Failed {}.", self.sent, self.failed)
    }
}

#[derive(Default)]
pub struct CommunicationsSlice {
    pub recipients: PagedCollection<AdminUser>,
    pub request: RequestState,
    /// Whole-roster counts, refreshed with each page fetch.
    pub total_count: i64,
    pub total_emails: i64,
    pub total_phones: i64,
    pub selected: Selection,
    pub filter: RecipientFilter,
}

impl CommunicationsSlice {
    pub async fn fetch_recipients(&mut self, client: &AdminClient, limit: i64) {
        self.request.begin();
        let query = UserListQuery::default()
            .with_page(self.recipients.page)
            .with_limit(limit);
        match client.get_users(&query).await {
            Ok(envelope) if envelope.ok => {
                let page: UsersPage = envelope.decode();
                self.total_count = page.total_count;
                self.total_emails = page.total_emails;
                self.total_phones = page.total_phones;
                self.recipients.apply(page.users, page.page, page.total_pages);
                self.request.succeed();
            }
            Ok(envelope) => self
                .request
                .fail(envelope.error_message("Failed to load users.")),
            Err(_) => self.request.fail("Failed to load users."),
        }
    }

    pub async fn send_email(
        &self,
        client: &AdminClient,
        subject: &str,
        content: &str,
    ) -> Result<SendReport, OpError> {
        require(subject, "Subject and content are required.")?;
        require(content, "Subject and content are required.")?;
        require_recipients(self.filter, &self.selected)?;
        let envelope = client
            .send_email_blast(subject, content, self.filter.as_str(), &self.selected.ids())
            .await
            .map_err(|_| OpError::Transport)?;
        if !envelope.ok {
            return Err(OpError::from_envelope(&envelope, "Failed to send email."));
        }
        Ok(envelope.decode())
    }

    pub async fn send_sms(
        &self,
        client: &AdminClient,
        content: &str,
    ) -> Result<SendReport, OpError> {
        require(content, "Message content is required.")?;
        require_recipients(self.filter, &self.selected)?;
        let envelope = client
            .send_sms_blast(content, self.filter.as_str(), &self.selected.ids())
            .await
            .map_err(|_| OpError::Transport)?;
        if !envelope.ok {
            return Err(OpError::from_envelope(&envelope, "Failed to send SMS."));
        }
        Ok(envelope.decode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_summary_line() {
        let report = SendReport { sent: 42, failed: 3 };
        assert_eq!(report.summary(), "Sent 42. Failed 3.");
    }
}
