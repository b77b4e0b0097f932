use anyhow::Result;
use clap::{Args, Subcommand};
use unap_admin_api::{AdminClient, SubmissionStatus};
use unap_admin_lib::SubmissionsSlice;

use crate::output::{page_line, print_submissions, OutputFormat};

#[derive(Args)]
pub struct SubmissionsArgs {
    #[command(subcommand)]
    pub action: SubmissionsCmd,
}

#[derive(Subcommand)]
pub enum SubmissionsCmd {
    /// List submissions
    List {
        /// Filter: pending, approved, rejected; omit for all
        #[arg(long)]
        status: Option<String>,

        /// Page number
        #[arg(long, default_value = "1")]
        page: i64,

        /// Results per page
        #[arg(long, default_value = "20")]
        limit: i64,
    },
    /// Approve or reject a submission
    Review {
        /// Submission id
        #[arg(long)]
        submission: String,

        /// Approve it
        #[arg(long, conflicts_with = "reject")]
        approve: bool,

        /// Reject it
        #[arg(long)]
        reject: bool,

        /// Notes shown back to the submitter
        #[arg(long)]
        notes: Option<String>,
    },
}

pub async fn run(args: &SubmissionsArgs, client: &AdminClient, format: &OutputFormat) -> Result<()> {
    let mut slice = SubmissionsSlice::default();

    match &args.action {
        SubmissionsCmd::List { status, page, limit } => {
            if let Some(raw) = status {
                let parsed = raw
                    .parse::<SubmissionStatus>()
                    .map_err(|_| anyhow::anyhow!("Unknown status: {}", raw))?;
                slice.set_status(Some(parsed));
            }
            slice.submissions.page = *page;
            slice.fetch(client, *limit).await;
            if !slice.request.error.is_empty() {
                anyhow::bail!("{}", slice.request.error);
            }
            print_submissions(&slice.submissions.items, format);
            page_line(slice.submissions.page, slice.submissions.total_pages);
        }
        SubmissionsCmd::Review {
            submission,
            approve,
            reject,
            notes,
        } => {
            let decision = match (approve, reject) {
                (true, _) => SubmissionStatus::Approved,
                (_, true) => SubmissionStatus::Rejected,
                _ => anyhow::bail!("Pass --approve or --reject."),
            };
            slice
                .review(client, submission, decision, notes.as_deref(), 20)
                .await?;
            println!("Submission {} {}.", submission, decision);
        }
    }

    Ok(())
}
