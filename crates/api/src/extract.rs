//! Request extractors that report malformed input through [`AppError`].
//!
//! Axum's stock `Json` and `Path` reject with plain-text bodies; these
//! wrappers route the rejection into the standard error envelope with 400.

use axum::extract::FromRequest;
use axum::extract::FromRequestParts;

use crate::error::AppError;

/// JSON request body. Use in place of `axum::Json` for inputs.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

/// Path parameters. Use in place of `axum::extract::Path`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);
