//! Extractors that turn axum rejections into `web::Error`, so malformed requests
//! get the same JSON error body as every other failure.

use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::web;

/// `axum::extract::Path` with `web::Error` as its rejection.
#[derive(Debug)]
pub struct WebPath<T>(pub T);

/// `axum::extract::Query` with `web::Error` as its rejection.
#[derive(Debug)]
pub struct WebQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for WebPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = web::Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(WebPath(value))
    }
}

impl<S, T> FromRequestParts<S> for WebQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = web::Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(WebQuery(value))
    }
}
