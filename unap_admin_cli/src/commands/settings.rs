use anyhow::Result;
use clap::{Args, Subcommand};
use unap_admin_api::{AdminClient, DEFAULT_BASE_URL};

#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub action: SettingsCmd,
}

#[derive(Subcommand)]
pub enum SettingsCmd {
    /// Show the stored connection settings
    Show,
    /// Point the CLI at a different server
    BaseUrl {
        /// Server base URL, e.g. https://admin.unap.example
        url: String,
    },
    /// Store a static admin key, used when no login token is present
    AdminKey {
        key: String,
    },
    /// Drop the stored login token
    Logout,
}

pub fn run(args: &SettingsArgs, client: &AdminClient) -> Result<()> {
    let session = client.session();

    match &args.action {
        SettingsCmd::Show => {
            println!(
                "Base URL:  {}",
                session
                    .base_url_override()
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            );
            println!(
                "Admin key: {}",
                if session.admin_key().is_some() { "set" } else { "not set" }
            );
            println!(
                "Session:   {}",
                if session.has_session() { "active" } else { "none" }
            );
        }
        SettingsCmd::BaseUrl { url } => {
            session.set_base_url(url);
            println!("Base URL stored.");
        }
        SettingsCmd::AdminKey { key } => {
            session.set_admin_key(key);
            println!("Admin key stored.");
        }
        SettingsCmd::Logout => {
            session.clear_token();
            println!("Signed out.");
        }
    }

    Ok(())
}
