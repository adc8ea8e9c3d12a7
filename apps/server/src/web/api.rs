use commentcloud_core::{VideoId, WordCloudPipeline, WordEntry};
use rocket::{FromForm, Route, State, get, routes, serde::json::Json};
use serde::Serialize;
use tracing::{Instrument, info_span};
use uuid::Uuid;

use super::error::Error;

type Result<T> = std::result::Result<Json<T>, Error>;

pub fn routes() -> Vec<Route> {
    routes![get_comments, get_health]
}

#[derive(Debug, FromForm)]
pub struct CommentsQuery {
    #[field(name = "videoId")]
    video_id: Option<String>,
}

#[get("/comments?<query..>")]
pub async fn get_comments(
    query: CommentsQuery,
    pipeline: &State<WordCloudPipeline>,
) -> Result<Vec<WordEntry>> {
    let input = query
        .video_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(Error::MissingVideoId)?;
    let video_id = VideoId::from_input(input)?;

    let span = info_span!("comments", request_id = %Uuid::new_v4(), %video_id);
    let words = pipeline.run(&video_id).instrument(span).await?;
    Ok(Json(words))
}

#[derive(Serialize)]
pub struct Health {
    status: &'static str,
    version: &'static str,
}

#[get("/health")]
pub fn get_health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
