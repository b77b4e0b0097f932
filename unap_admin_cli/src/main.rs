mod commands;
mod output;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use unap_admin_api::{AdminClient, FileStore, SessionStore};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "unap-admin")]
#[command(about = "Administer the UNAP platform from the terminal")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in with admin credentials
    Login(commands::login::LoginArgs),
    /// Headline metrics and chart series
    Overview,
    /// User directory plus rewards and offers
    Users(commands::users::UsersArgs),
    /// Restrict users, remove posts, inspect the audit trail
    Moderation(commands::moderation::ModerationArgs),
    /// The blast calendar and pending proposals
    Scheduling(commands::scheduling::SchedulingArgs),
    /// Trending tiers and manual pins
    Trending(commands::trending::TrendingArgs),
    /// The submission review queue
    Submissions(commands::submissions::SubmissionsArgs),
    /// User posts and official blasts
    Posts(commands::posts::PostsArgs),
    /// Mass email and SMS sends
    Communications(commands::communications::CommunicationsArgs),
    /// The support inbox
    Support(commands::support::SupportArgs),
    /// Local session and connection settings
    Settings(commands::settings::SettingsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("unap_admin=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let store = FileStore::open_default()?;
    let session = SessionStore::new(Arc::new(store));
    let client = AdminClient::new(session)?;

    let needs_session = !matches!(cli.command, Commands::Login(_) | Commands::Settings(_));
    if needs_session && !client.session().has_session() && client.session().admin_key().is_none() {
        anyhow::bail!(
            "Not signed in. Run `unap-admin login` or store a key with `unap-admin settings admin-key`."
        );
    }

    match &cli.command {
        Commands::Login(args) => commands::login::run(args, &client).await?,
        Commands::Overview => commands::overview::run(&client, &format).await?,
        Commands::Users(args) => commands::users::run(args, &client, &format).await?,
        Commands::Moderation(args) => commands::moderation::run(args, &client, &format).await?,
        Commands::Scheduling(args) => commands::scheduling::run(args, &client, &format).await?,
        Commands::Trending(args) => commands::trending::run(args, &client, &format).await?,
        Commands::Submissions(args) => commands::submissions::run(args, &client, &format).await?,
        Commands::Posts(args) => commands::posts::run(args, &client, &format).await?,
        Commands::Communications(args) => {
            commands::communications::run(args, &client, &format).await?
        }
        Commands::Support(args) => commands::support::run(args, &client, &format).await?,
        Commands::Settings(args) => commands::settings::run(args, &client)?,
    }

    Ok(())
}
