//! Overview slice: headline metrics and chart series.

use unap_admin_api::types::OverviewStats;
use unap_admin_api::AdminClient;

use super::paged::RequestState;

#[derive(Default)]
pub struct OverviewSlice {
    pub stats: OverviewStats,
    pub request: RequestState,
}

impl OverviewSlice {
    pub async fn fetch(&mut self, client: &AdminClient) {
        self.request.begin();
        match client.get_stats().await {
            Ok(envelope) if envelope.ok => {
                self.stats = envelope.decode();
                self.request.succeed();
            }
            Ok(envelope) => {
                self.request
                    .fail(envelope.error_message("Failed to load stats."));
            }
            Err(_) => self.request.fail("Failed to load stats."),
        }
    }
}
