use commentcloud_core::CloudError;
use rocket::{
    http::Status,
    response::{self, Responder},
    serde::json::Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing videoId")]
    MissingVideoId,
    #[error(transparent)]
    Cloud(#[from] CloudError),
}

#[derive(Serialize)]
struct JsonErrorResponse {
    error: &'static str,
}

fn json_error_response<'r, 'o: 'r>(
    req: &'r rocket::Request<'_>,
    message: &'static str,
    status: Status,
) -> response::Result<'o> {
    Json(JsonErrorResponse { error: message })
        .respond_to(req)
        .map(|mut res| {
            res.set_status(status);
            res
        })
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> response::Result<'o> {
        match self {
            Error::MissingVideoId => json_error_response(req, "Missing videoId", Status::BadRequest),
            Error::Cloud(err @ CloudError::InvalidInput { .. }) => {
                debug!("Rejected request: {err}");
                json_error_response(req, "Invalid videoId", Status::BadRequest)
            }
            Error::Cloud(err) => {
                error!("Failed to fetch comments: {err}");
                json_error_response(req, "Failed to fetch comments", Status::InternalServerError)
            }
        }
    }
}
