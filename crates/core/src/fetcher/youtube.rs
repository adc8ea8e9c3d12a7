use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{FetchError, Result},
    fetcher::{CommentPage, CommentSource},
    settings::Settings,
    video_id::VideoId,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadList {
    #[serde(default)]
    items: Vec<CommentThread>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: ThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    #[serde(default)]
    text_display: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Decode a `commentThreads` list response into a page of display texts.
pub fn parse_page(body: &str) -> std::result::Result<CommentPage, FetchError> {
    let list: CommentThreadList = serde_json::from_str(body)?;
    Ok(CommentPage {
        comments: list
            .items
            .into_iter()
            .map(|thread| thread.snippet.top_level_comment.snippet.text_display)
            .collect(),
        next_page_token: list.next_page_token,
    })
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) => body.trim().chars().take(200).collect(),
    }
}

/// YouTube Data API v3 client for comment threads.
#[derive(Clone, Debug)]
pub struct YouTubeClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    page_size: u32,
}

impl YouTubeClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()?;
        Ok(Self::with_client(http, settings))
    }

    pub fn with_client(http: reqwest::Client, settings: &Settings) -> Self {
        Self {
            http,
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            page_size: settings.page_size,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/commentThreads", self.api_base)
    }
}

#[async_trait]
impl CommentSource for YouTubeClient {
    async fn fetch_page(
        &self,
        video_id: &VideoId,
        page_token: Option<&str>,
    ) -> std::result::Result<CommentPage, FetchError> {
        let mut query = vec![
            ("part", "snippet".to_string()),
            ("videoId", video_id.to_string()),
            ("maxResults", self.page_size.to_string()),
            ("key", self.api_key.clone()),
        ];
        if let Some(token) = page_token {
            query.push(("pageToken", token.to_string()));
        }

        let response = self.http.get(self.endpoint()).query(&query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        debug!(%video_id, bytes = body.len(), "commentThreads response");
        parse_page(&body)
    }
}
