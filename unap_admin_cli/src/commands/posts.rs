use anyhow::Result;
use clap::Args;
use unap_admin_api::AdminClient;
use unap_admin_lib::PostContentSlice;

use crate::output::{page_line, print_blasts, print_posts, OutputFormat};

#[derive(Args)]
pub struct PostsArgs {
    /// Show official blasts instead of user posts
    #[arg(long)]
    pub official: bool,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub limit: i64,
}

pub async fn run(args: &PostsArgs, client: &AdminClient, format: &OutputFormat) -> Result<()> {
    let mut slice = PostContentSlice::default();

    if args.official {
        slice.official_posts.page = args.page;
        slice.fetch_official_posts(client, args.limit).await;
        print_blasts(&slice.official_posts.items, format);
        page_line(slice.official_posts.page, slice.official_posts.total_pages);
    } else {
        slice.user_posts.page = args.page;
        slice.fetch_user_posts(client, args.limit).await;
        if !slice.request.error.is_empty() {
            anyhow::bail!("{}", slice.request.error);
        }
        print_posts(&slice.user_posts.items, format);
        page_line(slice.user_posts.page, slice.user_posts.total_pages);
    }

    Ok(())
}
