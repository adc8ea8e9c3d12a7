//! Commentcloud Core Library
//!
//! Fetches the top-level comments of a YouTube video and turns them into
//! ranked word counts for a word cloud renderer.

pub mod analyzer;
pub mod error;
pub mod fetcher;
pub mod pipeline;
pub mod settings;
pub mod video_id;

// Re-export commonly used items at crate root
pub use analyzer::{Analyzer, MAX_WORDS, Ranking, StopwordFilter, WordEntry, analyze};
pub use error::{CloudError, FetchError, Result};
pub use fetcher::{CommentPage, CommentSource, FetchOptions, YouTubeClient, fetch_comments};
pub use pipeline::WordCloudPipeline;
pub use settings::Settings;
pub use video_id::VideoId;
