use anyhow::Result;
use clap::{Args, Subcommand};
use unap_admin_api::AdminClient;
use unap_admin_lib::ModerationSlice;

use crate::output::{page_line, print_actions, print_posts, print_users, OutputFormat};

#[derive(Args)]
pub struct ModerationArgs {
    #[command(subcommand)]
    pub action: ModerationCmd,
}

#[derive(Subcommand)]
pub enum ModerationCmd {
    /// List users under moderation view
    Users {
        /// Page number
        #[arg(long, default_value = "1")]
        page: i64,

        /// Results per page
        #[arg(long, default_value = "20")]
        limit: i64,
    },
    /// Block a user from sharing blasts
    Restrict {
        /// User id
        #[arg(long)]
        user: String,
    },
    /// Lift a user's restriction
    Unrestrict {
        /// User id
        #[arg(long)]
        user: String,
    },
    /// Delete one or more users
    DeleteUsers {
        /// User id; repeat for several
        #[arg(long = "user", required = true)]
        users: Vec<String>,
    },
    /// List user posts
    Posts {
        /// Page number
        #[arg(long, default_value = "1")]
        page: i64,

        /// Results per page
        #[arg(long, default_value = "20")]
        limit: i64,
    },
    /// Delete a post
    DeletePost {
        /// Post id
        #[arg(long)]
        post: String,
    },
    /// Show the moderation audit trail
    Actions {
        /// Page number
        #[arg(long, default_value = "1")]
        page: i64,

        /// Results per page
        #[arg(long, default_value = "20")]
        limit: i64,
    },
}

pub async fn run(args: &ModerationArgs, client: &AdminClient, format: &OutputFormat) -> Result<()> {
    let mut slice = ModerationSlice::default();

    match &args.action {
        ModerationCmd::Users { page, limit } => {
            slice.users.page = *page;
            slice.fetch_users(client, *limit).await;
            if !slice.users_request.error.is_empty() {
                anyhow::bail!("{}", slice.users_request.error);
            }
            print_users(&slice.users.items, format);
            page_line(slice.users.page, slice.users.total_pages);
        }
        ModerationCmd::Restrict { user } => {
            slice.restrict_user(client, user).await?;
            println!("User {} restricted.", user);
        }
        ModerationCmd::Unrestrict { user } => {
            slice.unrestrict_user(client, user).await?;
            println!("User {} unrestricted.", user);
        }
        ModerationCmd::DeleteUsers { users } => {
            for id in users {
                slice.selected_users.toggle(id);
            }
            slice.delete_selected_users(client).await?;
            println!("Deleted {} user(s).", users.len());
        }
        ModerationCmd::Posts { page, limit } => {
            slice.posts.page = *page;
            slice.fetch_posts(client, *limit).await;
            if !slice.posts_request.error.is_empty() {
                anyhow::bail!("{}", slice.posts_request.error);
            }
            print_posts(&slice.posts.items, format);
            page_line(slice.posts.page, slice.posts.total_pages);
        }
        ModerationCmd::DeletePost { post } => {
            slice.delete_post(client, post).await?;
            println!("Post {} deleted.", post);
        }
        ModerationCmd::Actions { page, limit } => {
            slice.actions.page = *page;
            slice.fetch_actions(client, *limit).await;
            if !slice.actions_request.error.is_empty() {
                anyhow::bail!("{}", slice.actions_request.error);
            }
            print_actions(&slice.actions.items, format);
            page_line(slice.actions.page, slice.actions.total_pages);
        }
    }

    Ok(())
}
