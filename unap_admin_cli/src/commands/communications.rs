use anyhow::Result;
use clap::{Args, Subcommand};
use unap_admin_api::AdminClient;
use unap_admin_lib::{CommunicationsSlice, RecipientFilter};

use crate::output::{page_line, print_users, OutputFormat};

#[derive(Args)]
pub struct CommunicationsArgs {
    #[command(subcommand)]
    pub action: CommunicationsCmd,
}

#[derive(Subcommand)]
pub enum CommunicationsCmd {
    /// List reachable recipients and roster totals
    Recipients {
        /// Page number
        #[arg(long, default_value = "1")]
        page: i64,

        /// Results per page
        #[arg(long, default_value = "20")]
        limit: i64,
    },
    /// Send a mass email
    Email {
        /// Email subject
        #[arg(long)]
        subject: String,

        /// Email body
        #[arg(long)]
        content: String,

        /// Limit to specific user ids; omit to send to everyone
        #[arg(long = "user")]
        users: Vec<String>,
    },
    /// Send a mass SMS
    Sms {
        /// Message text
        #[arg(long)]
        content: String,

        /// Limit to specific user ids; omit to send to everyone
        #[arg(long = "user")]
        users: Vec<String>,
    },
}

fn scoped(slice: &mut CommunicationsSlice, users: &[String]) {
    if !users.is_empty() {
        slice.filter = RecipientFilter::Selected;
        slice.selected.select_all(users.iter().map(String::as_str));
    }
}

pub async fn run(
    args: &CommunicationsArgs,
    client: &AdminClient,
    format: &OutputFormat,
) -> Result<()> {
    let mut slice = CommunicationsSlice::default();

    match &args.action {
        CommunicationsCmd::Recipients { page, limit } => {
            slice.recipients.page = *page;
            slice.fetch_recipients(client, *limit).await;
            if !slice.request.error.is_empty() {
                anyhow::bail!("{}", slice.request.error);
            }
            println!(
                "{} users, {} with email, {} with phone",
                slice.total_count, slice.total_emails, slice.total_phones
            );
            print_users(&slice.recipients.items, format);
            page_line(slice.recipients.page, slice.recipients.total_pages);
        }
        CommunicationsCmd::Email {
            subject,
            content,
            users,
        } => {
            scoped(&mut slice, users);
            let report = slice.send_email(client, subject, content).await?;
            println!("{}", report.summary());
        }
        CommunicationsCmd::Sms { content, users } => {
            scoped(&mut slice, users);
            let report = slice.send_sms(client, content).await?;
            println!("{}", report.summary());
        }
    }

    Ok(())
}
