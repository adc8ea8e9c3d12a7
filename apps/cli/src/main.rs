use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use commentcloud_core::{
    MAX_WORDS, Ranking, Settings, VideoId, WordCloudPipeline, settings::MAX_PAGES,
};

use crate::format::{format_duration, format_words_readable};

mod format;

/// CLI wrapper for Ranking enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliRanking {
    #[default]
    Frequency,
    FirstSeen,
}

impl From<CliRanking> for Ranking {
    fn from(cli: CliRanking) -> Self {
        match cli {
            CliRanking::Frequency => Ranking::Frequency,
            CliRanking::FirstSeen => Ranking::FirstSeen,
        }
    }
}

#[derive(Parser)]
#[command(name = "commentcloud")]
#[command(about = "Show the most frequent words in a YouTube video's comments")]
struct Cli {
    /// Video URL or 11-character video id
    url: String,

    /// How words are picked for the cloud
    #[arg(short, long, default_value = "frequency")]
    ranking: CliRanking,

    /// Number of words to show (at most 50)
    #[arg(short = 'n', long, default_value_t = MAX_WORDS)]
    limit: usize,

    /// Maximum number of comment pages to fetch (at most 10)
    #[arg(long, default_value_t = MAX_PAGES)]
    pages: u32,

    /// Retries per page on transient API failures
    #[arg(long, default_value_t = 0)]
    retries: u32,

    /// Keep comments from pages fetched before a failure
    #[arg(long)]
    best_effort: bool,

    /// Print the word list as JSON
    #[arg(long)]
    json: bool,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", style("Error:").red().bold(), message);
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Validate input and API key before any network call
    let video_id = VideoId::from_input(&cli.url).unwrap_or_else(|e| fail(e));
    let mut settings = Settings::from_env().unwrap_or_else(|e| fail(e));
    settings.max_pages = cli.pages;
    settings.retries = cli.retries;
    settings.best_effort = cli.best_effort;
    settings.ranking = cli.ranking.into();
    settings.word_limit = cli.limit;
    let settings = settings.normalized();

    let pipeline = WordCloudPipeline::from_settings(&settings)?;

    if cli.json {
        let words = pipeline.run(&video_id).await?;
        println!("{}", serde_json::to_string_pretty(&words)?);
        return Ok(());
    }

    println!(
        "\n{}  {}\n",
        style("commentcloud").cyan().bold(),
        style("Comment Word Cloud").dim()
    );

    let started = Instant::now();
    let spinner = create_spinner(&format!(
        "Fetching up to {} pages of comments for {}...",
        settings.max_pages, video_id
    ));
    let words = match pipeline.run(&video_id).await {
        Ok(words) => words,
        Err(e) => {
            spinner.finish_and_clear();
            fail(e);
        }
    };
    spinner.finish_with_message(format!(
        "{} Counted {} words {}",
        style("✓").green().bold(),
        words.len(),
        style(format!("[{}]", format_duration(started.elapsed()))).dim()
    ));

    println!("{}", style("─".repeat(60)).dim());
    print!("{}", format_words_readable(&words));

    Ok(())
}
