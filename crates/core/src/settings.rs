use std::time::Duration;

use crate::{
    analyzer::{MAX_WORDS, Ranking},
    error::{CloudError, Result},
};

pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Largest `maxResults` the `commentThreads` endpoint accepts.
pub const MAX_PAGE_SIZE: u32 = 100;
/// Hard ceiling on `commentThreads` requests per video.
pub const MAX_PAGES: u32 = 10;

/// Process-wide configuration, built once at startup and handed to the
/// components that need it.
#[derive(Clone, Debug)]
pub struct Settings {
    pub api_key: String,
    pub api_base: String,
    pub max_pages: u32,
    pub page_size: u32,
    pub retries: u32,
    pub retry_backoff: Duration,
    pub best_effort: bool,
    pub request_timeout: Duration,
    pub ranking: Ranking,
    pub word_limit: usize,
}

impl Settings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            max_pages: MAX_PAGES,
            page_size: MAX_PAGE_SIZE,
            retries: 0,
            retry_backoff: Duration::from_millis(500),
            best_effort: false,
            request_timeout: Duration::from_secs(30),
            ranking: Ranking::default(),
            word_limit: MAX_WORDS,
        }
    }

    /// Build settings from `YOUTUBE_API_KEY` and optional `COMMENTCLOUD_*`
    /// overrides. Unparseable overrides are ignored.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| CloudError::MissingApiKey {
                env_var: API_KEY_ENV.to_string(),
            })?;

        let mut settings = Self::new(api_key);
        if let Ok(base) = std::env::var("COMMENTCLOUD_API_BASE") {
            settings.api_base = base;
        }
        if let Some(pages) = env_parse("COMMENTCLOUD_MAX_PAGES") {
            settings.max_pages = pages;
        }
        if let Some(retries) = env_parse("COMMENTCLOUD_RETRIES") {
            settings.retries = retries;
        }
        if let Some(best_effort) = env_parse("COMMENTCLOUD_BEST_EFFORT") {
            settings.best_effort = best_effort;
        }
        if let Some(secs) = env_parse("COMMENTCLOUD_TIMEOUT_SECS") {
            settings.request_timeout = Duration::from_secs(secs);
        }
        Ok(settings.normalized())
    }

    /// Clamp values into the ranges the API and the output contract allow.
    pub fn normalized(mut self) -> Self {
        self.max_pages = self.max_pages.clamp(1, MAX_PAGES);
        self.page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        self.word_limit = self.word_limit.min(MAX_WORDS);
        self.api_base = self.api_base.trim_end_matches('/').to_string();
        self
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.trim().parse().ok()
}
