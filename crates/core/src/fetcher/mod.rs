//! Paginated retrieval of top-level comments.

mod youtube;

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
    error::{CloudError, FetchError, Result},
    settings::{MAX_PAGES, Settings},
    video_id::VideoId,
};

pub use youtube::{YouTubeClient, parse_page};

/// One batch of comment texts and the cursor to the next batch, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentPage {
    pub comments: Vec<String>,
    pub next_page_token: Option<String>,
}

/// Something that can return one page of a video's top-level comments.
#[async_trait]
pub trait CommentSource: Send + Sync {
    async fn fetch_page(
        &self,
        video_id: &VideoId,
        page_token: Option<&str>,
    ) -> std::result::Result<CommentPage, FetchError>;
}

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub max_pages: u32,
    pub retries: u32,
    pub retry_backoff: Duration,
    pub best_effort: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_pages: MAX_PAGES,
            retries: 0,
            retry_backoff: Duration::from_millis(500),
            best_effort: false,
        }
    }
}

impl From<&Settings> for FetchOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            max_pages: settings.max_pages.clamp(1, MAX_PAGES),
            retries: settings.retries,
            retry_backoff: settings.retry_backoff,
            best_effort: settings.best_effort,
        }
    }
}

/// Collect comment texts page by page until the source stops returning a
/// continuation token or `max_pages` requests have been made. `max_pages`
/// is capped at [`MAX_PAGES`].
///
/// Pages are requested strictly one after another since each token comes
/// from the previous response. Any failed page fails the whole fetch unless
/// `best_effort` is set and at least one page already succeeded.
pub async fn fetch_comments(
    source: &dyn CommentSource,
    video_id: &VideoId,
    options: &FetchOptions,
) -> Result<Vec<String>> {
    let mut comments = Vec::new();
    let mut page_token: Option<String> = None;

    for page in 1..=options.max_pages.clamp(1, MAX_PAGES) {
        let fetched =
            match fetch_page_with_retry(source, video_id, page_token.as_deref(), options).await {
                Ok(fetched) => fetched,
                Err(e) if options.best_effort && page > 1 => {
                    warn!(%video_id, page, error = %e, "Keeping comments from earlier pages");
                    break;
                }
                Err(e) => return Err(CloudError::FetchFailed { page, source: e }),
            };

        debug!(%video_id, page, comments = fetched.comments.len(), "Fetched comment page");
        comments.extend(fetched.comments);

        match fetched.next_page_token.filter(|t| !t.is_empty()) {
            Some(next) => page_token = Some(next),
            None => break,
        }
    }

    Ok(comments)
}

async fn fetch_page_with_retry(
    source: &dyn CommentSource,
    video_id: &VideoId,
    page_token: Option<&str>,
    options: &FetchOptions,
) -> std::result::Result<CommentPage, FetchError> {
    let mut attempt = 0;
    loop {
        match source.fetch_page(video_id, page_token).await {
            Ok(page) => return Ok(page),
            Err(e) if attempt < options.retries && e.is_transient() => {
                let delay = options.retry_backoff.saturating_mul(1 << attempt.min(16));
                attempt += 1;
                warn!(%video_id, attempt, error = %e, ?delay, "Retrying comment page");
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}
