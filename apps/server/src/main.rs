use std::net::IpAddr;

use anyhow::Result;
use clap::Parser;
use commentcloud_core::{Ranking, Settings, WordCloudPipeline, settings::MAX_PAGES};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod web;

#[derive(Parser)]
#[command(name = "commentcloud-server")]
#[command(about = "Serve the most frequent words in a YouTube video's comments")]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 4000)]
    port: u16,

    /// Address to bind to
    #[arg(long, env = "ADDRESS", default_value = "0.0.0.0")]
    address: IpAddr,

    /// Maximum number of comment pages fetched per video (at most 10)
    #[arg(long, env = "COMMENTCLOUD_MAX_PAGES", default_value_t = MAX_PAGES)]
    max_pages: u32,

    /// Retries per page on transient API failures
    #[arg(long, env = "COMMENTCLOUD_RETRIES", default_value_t = 0)]
    retries: u32,

    /// Return comments from pages fetched before a failure instead of an error
    #[arg(long, env = "COMMENTCLOUD_BEST_EFFORT")]
    best_effort: bool,

    /// Pick the first distinct words seen instead of the most frequent ones
    #[arg(long)]
    first_seen: bool,

    /// Do not send CORS headers
    #[arg(long)]
    no_cors: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("commentcloud_server=info".parse()?)
                .add_directive("commentcloud_core=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "commentcloud-server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let mut settings = Settings::from_env()?;
    settings.max_pages = cli.max_pages;
    settings.retries = cli.retries;
    settings.best_effort = cli.best_effort;
    if cli.first_seen {
        settings.ranking = Ranking::FirstSeen;
    }
    let settings = settings.normalized();

    let pipeline = WordCloudPipeline::from_settings(&settings)?;

    let mut rocket_cfg = rocket::Config::release_default();
    rocket_cfg.address = cli.address;
    rocket_cfg.port = cli.port;

    web::run(pipeline, rocket_cfg, !cli.no_cors).await
}
