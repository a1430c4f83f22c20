use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use thiserror::Error;

use shared::{CastError, ErrorResponse};

use crate::store::{CastVoteError, StoreError};

/// Request-level failures, each mapped to a status code and rendered as the
/// `{success:false, message}` envelope.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("You have already voted. Each voter can only vote once.")]
    AlreadyVoted,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Server error: {0}")]
    Storage(#[from] StoreError),
}

impl ApiError {
    fn status(&self) -> Status {
        match self {
            ApiError::InvalidRequest(_) => Status::BadRequest,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::AlreadyVoted => Status::Forbidden,
            ApiError::MethodNotAllowed => Status::MethodNotAllowed,
            ApiError::Storage(_) => Status::InternalServerError,
        }
    }
}

impl From<CastError> for ApiError {
    fn from(err: CastError) -> Self {
        match err {
            CastError::AlreadyVoted => ApiError::AlreadyVoted,
            CastError::VoterNotFound | CastError::CandidateNotFound => {
                ApiError::NotFound(err.to_string())
            }
        }
    }
}

impl From<CastVoteError> for ApiError {
    fn from(err: CastVoteError) -> Self {
        match err {
            CastVoteError::Rejected(e) => e.into(),
            CastVoteError::Store(e) => e.into(),
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        let body = Json(ErrorResponse::new(self.to_string()));
        rocket::Response::build_from(body.respond_to(req)?)
            .status(status)
            .ok()
    }
}
