//! Handler for the home listing page.

use axum::{
  extract::State,
  http::HeaderMap,
  response::{IntoResponse, Response},
};

use agenda_core::ContatoStore;

use crate::{error::Error, flash::Sessions, views, AppState};

/// `GET /` — every contact, newest first, dates formatted for display.
pub async fn index<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
) -> Response
where
  S: ContatoStore + Clone + Send + Sync + 'static,
{
  match state.contatos.list_all().await {
    Ok(contatos) => {
      let flash = state.sessions.take(Sessions::session_id(&headers));
      views::listagem(&flash, &contatos).into_response()
    }
    Err(e) => Error::Store(Box::new(e)).into_response(),
  }
}
