use anyhow::Result;
use clap::{Args, Subcommand};
use unap_admin_api::AdminClient;
use unap_admin_lib::SupportSlice;

use crate::output::{page_line, print_messages, print_threads, OutputFormat};

#[derive(Args)]
pub struct SupportArgs {
    #[command(subcommand)]
    pub action: SupportCmd,
}

#[derive(Subcommand)]
pub enum SupportCmd {
    /// List support threads
    Threads {
        /// Page number
        #[arg(long, default_value = "1")]
        page: i64,

        /// Results per page
        #[arg(long, default_value = "20")]
        limit: i64,
    },
    /// Show one thread's transcript
    Messages {
        /// Thread id
        #[arg(long)]
        thread: String,

        /// Page number
        #[arg(long, default_value = "1")]
        page: i64,

        /// Messages per page
        #[arg(long, default_value = "50")]
        limit: i64,
    },
    /// Mark a thread pending or solved
    Status {
        /// Thread id
        #[arg(long)]
        thread: String,

        /// New status: pending or solved
        #[arg(long)]
        status: String,
    },
    /// Detach every linked external account from a thread's user
    ClearLinks {
        /// Thread id
        #[arg(long)]
        thread: String,

        /// The thread's user id
        #[arg(long)]
        user: String,
    },
}

pub async fn run(args: &SupportArgs, client: &AdminClient, format: &OutputFormat) -> Result<()> {
    let mut slice = SupportSlice::default();

    match &args.action {
        SupportCmd::Threads { page, limit } => {
            slice.threads.page = *page;
            slice.fetch_threads(client, *limit).await;
            if !slice.threads_request.error.is_empty() {
                anyhow::bail!("{}", slice.threads_request.error);
            }
            print_threads(&slice.threads.items, format);
            page_line(slice.threads.page, slice.threads.total_pages);
        }
        SupportCmd::Messages { thread, page, limit } => {
            slice.set_active_thread(thread);
            slice.messages.page = *page;
            slice.fetch_messages(client, *limit).await;
            if !slice.messages_request.error.is_empty() {
                anyhow::bail!("{}", slice.messages_request.error);
            }
            print_messages(&slice.messages.items, format);
            page_line(slice.messages.page, slice.messages.total_pages);
        }
        SupportCmd::Status { thread, status } => {
            slice.set_status(client, thread, status).await?;
            println!("Thread {} marked {}.", thread, status);
        }
        SupportCmd::ClearLinks { thread, user } => {
            slice.clear_linked_accounts(client, thread, user).await?;
            println!("Linked accounts cleared for user {}.", user);
        }
    }

    Ok(())
}
