use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use strum_macros::AsRefStr;

use crate::model::ModelError;

pub type WebResult<T> = core::result::Result<T, Error>;

#[derive(Debug, AsRefStr, thiserror::Error)]
pub enum Error {
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("path rejection: {0}")]
    PathRejection(#[from] PathRejection),
    #[error("query rejection: {0}")]
    QueryRejection(#[from] QueryRejection),
}

impl Error {
    pub fn status_code_and_client_error(&self) -> (StatusCode, ClientError) {
        use ClientError::*;

        match self {
            Error::Model(model_er) => match model_er {
                ModelError::ActivityNotFound(_) => (StatusCode::NOT_FOUND, ActivityNotFound),
                ModelError::AlreadyRegistered { .. } => {
                    (StatusCode::BAD_REQUEST, AlreadyRegistered)
                }
                ModelError::ParticipantNotFound { .. } => {
                    (StatusCode::NOT_FOUND, ParticipantNotFound)
                }
            },
            // Extractor rejections keep axum's status (400 for malformed input).
            Error::PathRejection(rej) => (rej.status(), InvalidInput(rej.body_text())),
            Error::QueryRejection(rej) => (rej.status(), InvalidInput(rej.body_text())),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::debug!("{:<12} - into_response(Error: {self:?})", "INTO_RESP");

        // Construct a response
        let mut res = StatusCode::INTERNAL_SERVER_ERROR.into_response();

        // Insert the Error into response so that it can be retrieved later.
        res.extensions_mut().insert(Arc::new(self));

        res
    }
}

/// The error kinds a client gets to see.
/// `Display` is the human readable detail, `AsRef<str>` the machine readable kind.
#[derive(Debug, AsRefStr, derive_more::Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientError {
    #[display("Activity not found")]
    ActivityNotFound,
    #[display("Student is already signed up for this activity")]
    AlreadyRegistered,
    #[display("Student is not signed up for this activity")]
    ParticipantNotFound,
    #[display("Received invalid input: {_0}")]
    InvalidInput(String),
}
