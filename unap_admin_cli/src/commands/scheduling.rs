use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;
use unap_admin_api::types::BlastDraft;
use unap_admin_api::AdminClient;
use unap_admin_lib::SchedulingSlice;

use crate::output::{page_line, print_blasts, print_submissions, OutputFormat};

#[derive(Args)]
pub struct SchedulingArgs {
    #[command(subcommand)]
    pub action: SchedulingCmd,
}

#[derive(Subcommand)]
pub enum SchedulingCmd {
    /// Show the blast calendar and pending proposals
    List {
        /// Blast page number
        #[arg(long, default_value = "1")]
        page: i64,

        /// Blasts per page
        #[arg(long, default_value = "20")]
        limit: i64,

        /// Pending submission page number
        #[arg(long, default_value = "1")]
        submissions_page: i64,

        /// Pending submissions per page
        #[arg(long, default_value = "10")]
        submissions_limit: i64,
    },
    /// Create a blast
    Create {
        /// Blast title
        #[arg(long)]
        title: String,

        /// Blast body
        #[arg(long)]
        content: Option<String>,

        /// Release time, RFC 3339
        #[arg(long)]
        scheduled_for: Option<String>,

        /// Attachment file
        #[arg(long)]
        media: Option<PathBuf>,
    },
    /// Update a blast; only the passed fields change
    Update {
        /// Blast id
        #[arg(long)]
        blast: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        content: Option<String>,

        #[arg(long)]
        scheduled_for: Option<String>,

        #[arg(long)]
        media: Option<PathBuf>,
    },
    /// Delete a blast
    Delete {
        /// Blast id
        #[arg(long)]
        blast: String,
    },
    /// Release a scheduled blast now
    Release {
        /// Blast id
        #[arg(long)]
        blast: String,
    },
    /// Assign an existing blast to a user as a reward or priced offer
    Assign {
        /// Blast id
        #[arg(long)]
        blast: String,

        /// Recipient user id
        #[arg(long)]
        user: String,

        /// Offer price in dollars; omit for a free reward
        #[arg(long)]
        price: Option<f64>,
    },
}

fn draft_from(
    title: Option<String>,
    content: Option<String>,
    scheduled_for: Option<String>,
    media: &Option<PathBuf>,
) -> Result<BlastDraft> {
    let media = match media {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "media".to_string());
            Some((name, bytes))
        }
        None => None,
    };
    Ok(BlastDraft {
        title,
        content,
        scheduled_for,
        media,
    })
}

pub async fn run(args: &SchedulingArgs, client: &AdminClient, format: &OutputFormat) -> Result<()> {
    let mut slice = SchedulingSlice::default();

    match &args.action {
        SchedulingCmd::List {
            page,
            limit,
            submissions_page,
            submissions_limit,
        } => {
            slice.blasts.page = *page;
            slice.submissions.page = *submissions_page;
            slice.fetch(client, *limit, *submissions_limit).await;
            if !slice.request.error.is_empty() {
                anyhow::bail!("{}", slice.request.error);
            }
            println!("Blasts:");
            print_blasts(&slice.blasts.items, format);
            page_line(slice.blasts.page, slice.blasts.total_pages);
            println!("Pending submissions:");
            print_submissions(&slice.submissions.items, format);
            page_line(slice.submissions.page, slice.submissions.total_pages);
        }
        SchedulingCmd::Create {
            title,
            content,
            scheduled_for,
            media,
        } => {
            let draft = draft_from(
                Some(title.clone()),
                content.clone(),
                scheduled_for.clone(),
                media,
            )?;
            slice.create_blast(client, draft, 20, 10).await?;
            println!("Blast created.");
        }
        SchedulingCmd::Update {
            blast,
            title,
            content,
            scheduled_for,
            media,
        } => {
            let draft = draft_from(title.clone(), content.clone(), scheduled_for.clone(), media)?;
            slice.update_blast(client, blast, draft, 20, 10).await?;
            println!("Blast {} updated.", blast);
        }
        SchedulingCmd::Delete { blast } => {
            slice.delete_blast(client, blast, 20, 10).await?;
            println!("Blast {} deleted.", blast);
        }
        SchedulingCmd::Release { blast } => {
            slice.release_blast(client, blast, 20, 10).await?;
            println!("Blast {} released.", blast);
        }
        SchedulingCmd::Assign { blast, user, price } => {
            slice.assign_blast(client, blast, user, *price).await?;
            println!("Blast {} assigned to {}.", blast, user);
        }
    }

    Ok(())
}
