use axum::extract::{FromRequest, FromRequestParts};

use super::error::ApiError;

/// `axum::Json` whose rejections come back as [`ApiError`] bodies.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub(crate) struct ApiJson<T>(pub T);

/// `axum::extract::Path` whose rejections come back as [`ApiError`] bodies.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub(crate) struct ApiPath<T>(pub T);
