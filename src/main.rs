use clap::Parser;
use steamprofile::config::{cli::Args, Config};
use steamprofile::error::Result;
use steamprofile::infrastructure::CommunityClient;
use steamprofile::services::{write_profile, ProfileService};
use steamprofile::UserId;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays clean JSON
    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::new(args)?;
    let user: UserId = config.args.identifier.parse()?;

    let client = CommunityClient::new(config.http_client.clone(), config.settings.base_url.as_str());
    let service = ProfileService::new(client);

    let profile = service.fetch(&user).await?;
    write_profile(&profile, config.args.output.as_deref())?;

    info!("Profile scraping completed successfully!");
    Ok(())
}
