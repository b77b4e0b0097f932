use anyhow::Result;
use clap::{Args, Subcommand};
use unap_admin_api::{AdminClient, UserFilter};
use unap_admin_lib::{GrantBlast, GrantForm, GrantMode, UsersSlice};

use crate::output::{format_cents, page_line, print_offers, print_rewarded, print_users, OutputFormat};

#[derive(Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersAction,
}

#[derive(Subcommand)]
pub enum UsersAction {
    /// List users
    List {
        /// Filter: all, active, restricted, rewarded
        #[arg(long, default_value = "all")]
        filter: String,

        /// Page number
        #[arg(long, default_value = "1")]
        page: i64,

        /// Results per page
        #[arg(long, default_value = "20")]
        limit: i64,
    },
    /// Rewarded blasts and open offers, with earnings totals
    Rewarded {
        /// Offers page number
        #[arg(long, default_value = "1")]
        offers_page: i64,

        /// Rewarded page number
        #[arg(long, default_value = "1")]
        rewarded_page: i64,
    },
    /// Grant a blast to a user, free or priced
    Grant {
        /// Recipient user id
        #[arg(long)]
        user: String,

        /// Existing blast id to grant
        #[arg(long, conflicts_with = "title")]
        blast: Option<String>,

        /// Title for a blast created on the fly
        #[arg(long)]
        title: Option<String>,

        /// Content for the new blast
        #[arg(long, requires = "title")]
        content: Option<String>,

        /// Offer price in dollars; omit for a free reward
        #[arg(long)]
        price: Option<f64>,
    },
}

pub async fn run(args: &UsersArgs, client: &AdminClient, format: &OutputFormat) -> Result<()> {
    let mut slice = UsersSlice::default();

    match &args.action {
        UsersAction::List { filter, page, limit } => {
            slice.set_filter(filter.parse::<UserFilter>().unwrap_or(UserFilter::All));
            slice.users.page = *page;
            slice.fetch_users(client, *limit).await;
            if !slice.request.error.is_empty() {
                anyhow::bail!("{}", slice.request.error);
            }
            print_users(&slice.users.items, format);
            page_line(slice.users.page, slice.users.total_pages);
        }
        UsersAction::Rewarded {
            offers_page,
            rewarded_page,
        } => {
            slice.offers.page = *offers_page;
            slice.rewarded.page = *rewarded_page;
            slice.fetch_offers_summary(client).await;
            slice.fetch_rewarded_data(client).await;
            if !slice.rewarded_request.error.is_empty() {
                anyhow::bail!("{}", slice.rewarded_request.error);
            }
            println!(
                "Total earnings: {}",
                format_cents(slice.offers_summary.total_earnings_cents, "usd")
            );
            println!("Rewarded:");
            print_rewarded(&slice.rewarded.items, format);
            page_line(slice.rewarded.page, slice.rewarded.total_pages);
            println!("Offers:");
            print_offers(&slice.offers.items, format);
            page_line(slice.offers.page, slice.offers.total_pages);
        }
        UsersAction::Grant {
            user,
            blast,
            title,
            content,
            price,
        } => {
            let blast = match (blast, title) {
                (Some(id), _) => GrantBlast::Existing(id.clone()),
                (None, Some(title)) => GrantBlast::New(unap_admin_api::types::BlastDraft {
                    title: Some(title.clone()),
                    content: content.clone(),
                    ..Default::default()
                }),
                (None, None) => anyhow::bail!("Pass --blast or --title."),
            };
            let mode = match price {
                Some(price_dollars) => GrantMode::Offer {
                    price_dollars: *price_dollars,
                },
                None => GrantMode::Reward,
            };
            slice
                .send_grant(
                    client,
                    GrantForm {
                        user_id: user.clone(),
                        blast,
                        mode,
                    },
                )
                .await?;
            println!("Grant sent.");
        }
    }

    Ok(())
}
