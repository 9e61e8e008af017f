//! Error type at the request-handler boundary.
//!
//! Validation failures never pass through here — they are data, carried to
//! the user as flash messages. Only the two genuinely exceptional outcomes
//! become an `Error`, and both collapse into the same generic page.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::views;

#[derive(Debug, Error)]
pub enum Error {
  /// Missing record, absent identifier, or malformed identifier.
  #[error("not found")]
  NotFound,

  /// Unexpected persistence failure. Logged, then shown to the user as the
  /// same generic page a missing record gets.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    if let Error::Store(e) = &self {
      tracing::error!(error = %e, "contact store failure");
    }
    views::nao_encontrada().into_response()
  }
}
