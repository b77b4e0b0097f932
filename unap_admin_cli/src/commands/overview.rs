use anyhow::Result;
use unap_admin_api::AdminClient;
use unap_admin_lib::OverviewSlice;

use crate::output::{print_stats, OutputFormat};

pub async fn run(client: &AdminClient, format: &OutputFormat) -> Result<()> {
    let mut slice = OverviewSlice::default();
    slice.fetch(client).await;
    if !slice.request.error.is_empty() {
        anyhow::bail!("{}", slice.request.error);
    }
    print_stats(&slice.stats, format);
    Ok(())
}
