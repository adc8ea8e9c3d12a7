use std::sync::Arc;

use tracing::info;

use crate::{
    analyzer::{Analyzer, WordEntry},
    error::Result,
    fetcher::{CommentSource, FetchOptions, YouTubeClient, fetch_comments},
    settings::Settings,
    video_id::VideoId,
};

/// Fetch a video's comments and turn them into ranked word counts.
#[derive(Clone)]
pub struct WordCloudPipeline {
    source: Arc<dyn CommentSource>,
    fetch: FetchOptions,
    analyzer: Analyzer,
}

impl WordCloudPipeline {
    pub fn new(source: Arc<dyn CommentSource>, settings: &Settings) -> Self {
        Self {
            source,
            fetch: FetchOptions::from(settings),
            analyzer: Analyzer::new()
                .with_ranking(settings.ranking)
                .with_limit(settings.word_limit),
        }
    }

    /// Pipeline backed by the YouTube Data API.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = YouTubeClient::new(settings)?;
        Ok(Self::new(Arc::new(client), settings))
    }

    pub fn with_analyzer(mut self, analyzer: Analyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    #[tracing::instrument(name = "word_cloud", skip_all, fields(video_id = %video_id))]
    pub async fn run(&self, video_id: &VideoId) -> Result<Vec<WordEntry>> {
        let comments = fetch_comments(self.source.as_ref(), video_id, &self.fetch).await?;
        let corpus = comments.join(" ");
        let words = self.analyzer.analyze(&corpus);

        info!(
            comments = comments.len(),
            words = words.len(),
            "Analyzed comments"
        );
        Ok(words)
    }

    /// Validate a user-supplied identifier or URL, then run.
    pub async fn run_input(&self, input: &str) -> Result<Vec<WordEntry>> {
        let video_id = VideoId::from_input(input)?;
        self.run(&video_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    use crate::{
        analyzer::{Ranking, StopwordFilter},
        error::CloudError,
        fetcher::tests::{EndlessSource, ScriptedSource, page, unavailable, video},
        settings::MAX_PAGES,
    };

    fn pipeline(source: Arc<ScriptedSource>) -> WordCloudPipeline {
        WordCloudPipeline::new(source, &Settings::new("test-key"))
    }

    #[tokio::test]
    async fn joins_pages_and_counts_words() {
        let source = Arc::new(ScriptedSource::new([
            Ok(page(&["Great video!", "great VIDEO,"], Some("next"))),
            Ok(page(&["thanks!! <b>thanks</b>"], None)),
        ]));

        let words = pipeline(source.clone()).run(&video()).await.unwrap();

        assert_eq!(source.calls(), 2);
        assert_eq!(
            words,
            [
                WordEntry { text: "great".into(), value: 2 },
                WordEntry { text: "video".into(), value: 2 },
                WordEntry { text: "thanks".into(), value: 2 },
            ]
        );
    }

    #[tokio::test]
    async fn comments_are_separated_when_joined() {
        let source = Arc::new(ScriptedSource::new([Ok(page(&["hello", "world"], None))]));

        let words = pipeline(source).run(&video()).await.unwrap();

        assert_eq!(words.len(), 2);
    }

    #[tokio::test]
    async fn invalid_input_makes_no_calls() {
        let source = Arc::new(ScriptedSource::new([]));

        let err = pipeline(source.clone())
            .run_input("invalid!")
            .await
            .unwrap_err();

        assert!(matches!(err, CloudError::InvalidInput { .. }));
        assert_eq!(source.calls(), 0);
    }

    #[tokio::test]
    async fn fetch_failure_propagates() {
        let source = Arc::new(ScriptedSource::new([Err(unavailable())]));

        let err = pipeline(source).run(&video()).await.unwrap_err();

        assert!(matches!(err, CloudError::FetchFailed { page: 1, .. }));
    }

    #[tokio::test]
    async fn settings_select_ranking_and_limit() {
        let source = Arc::new(ScriptedSource::new([Ok(page(
            &["first second second third third third"],
            None,
        ))]));
        let mut settings = Settings::new("test-key");
        settings.ranking = Ranking::FirstSeen;
        settings.word_limit = 2;

        let words = WordCloudPipeline::new(source, &settings)
            .run(&video())
            .await
            .unwrap();

        let texts: Vec<_> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
    }

    #[tokio::test]
    async fn configured_page_limit_cannot_exceed_ceiling() {
        let source = Arc::new(EndlessSource::default());
        let mut settings = Settings::new("test-key");
        settings.max_pages = 20;

        WordCloudPipeline::new(source.clone(), &settings.normalized())
            .run(&video())
            .await
            .unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), MAX_PAGES);
    }

    #[tokio::test]
    async fn custom_analyzer_replaces_default() {
        let source = Arc::new(ScriptedSource::new([Ok(page(
            &["first video video great great great"],
            None,
        ))]));

        let words = pipeline(source)
            .with_analyzer(
                Analyzer::new().with_stopwords(StopwordFilter::default().with_extra(["great"])),
            )
            .run(&video())
            .await
            .unwrap();

        let texts: Vec<_> = words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, ["video", "first"]);
    }
}
