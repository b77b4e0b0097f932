use anyhow::Result;
use clap::Args;
use unap_admin_api::AdminClient;

#[derive(Args)]
pub struct LoginArgs {
    /// Admin account email
    #[arg(long)]
    pub email: String,

    /// Admin account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: &LoginArgs, client: &AdminClient) -> Result<()> {
    let envelope = client.login(&args.email, &args.password).await?;
    if !envelope.ok {
        // The server message is shown verbatim, e.g. "Invalid credentials".
        anyhow::bail!("{}", envelope.error_message("Login failed."));
    }
    let token = envelope
        .data
        .get("token")
        .and_then(|t| t.as_str())
        .unwrap_or_default();
    if token.is_empty() {
        anyhow::bail!("Login response carried no token.");
    }
    client.session().set_token(token);
    println!("Signed in as {}.", args.email);
    Ok(())
}
