use anyhow::Result;
use clap::{Args, Subcommand};
use unap_admin_api::{AdminClient, TrendingOverviewQuery};
use unap_admin_lib::TrendingSlice;

use crate::output::{page_line, print_trending, OutputFormat};

#[derive(Args)]
pub struct TrendingArgs {
    #[command(subcommand)]
    pub action: TrendingCmd,
}

#[derive(Subcommand)]
pub enum TrendingCmd {
    /// Show all three trending tiers
    Overview {
        /// Top tier page
        #[arg(long, default_value = "1")]
        top_page: i64,

        /// Manual tier page
        #[arg(long, default_value = "1")]
        manual_page: i64,

        /// Organic tier page
        #[arg(long, default_value = "1")]
        organic_page: i64,
    },
    /// Pin a post into the manual tier
    Pin {
        /// Post id
        #[arg(long)]
        post: String,
    },
    /// Remove a manual pin
    Unpin {
        /// Placement id
        #[arg(long)]
        placement: String,
    },
    /// Move a manual pin to a new slot
    Move {
        /// Placement id
        #[arg(long)]
        placement: String,

        /// Target slot, 1-based
        #[arg(long)]
        position: i64,
    },
}

pub async fn run(args: &TrendingArgs, client: &AdminClient, format: &OutputFormat) -> Result<()> {
    let mut slice = TrendingSlice::default();

    match &args.action {
        TrendingCmd::Overview {
            top_page,
            manual_page,
            organic_page,
        } => {
            let query = TrendingOverviewQuery::default()
                .with_top_page(*top_page)
                .with_manual_page(*manual_page)
                .with_organic_page(*organic_page);
            slice.fetch(client, query).await;
            if !slice.request.error.is_empty() {
                anyhow::bail!("{}", slice.request.error);
            }
            println!("Top:");
            print_trending(&slice.overview.top, format);
            page_line(slice.overview.meta.top.page, slice.overview.meta.top.total_pages);
            println!("Manual:");
            print_trending(&slice.overview.manual, format);
            page_line(
                slice.overview.meta.manual.page,
                slice.overview.meta.manual.total_pages,
            );
            println!("Organic:");
            print_trending(&slice.overview.organic, format);
            page_line(
                slice.overview.meta.organic.page,
                slice.overview.meta.organic.total_pages,
            );
        }
        TrendingCmd::Pin { post } => {
            slice.pin(client, post).await?;
            println!("Post {} pinned.", post);
        }
        TrendingCmd::Unpin { placement } => {
            slice.unpin(client, placement).await?;
            println!("Placement {} unpinned.", placement);
        }
        TrendingCmd::Move { placement, position } => {
            slice.move_pin(client, placement, *position).await?;
            println!("Placement {} moved to slot {}.", placement, position);
        }
    }

    Ok(())
}
