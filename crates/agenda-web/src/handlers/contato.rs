//! Handlers for the contact form pages.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/contato/index` | blank create form |
//! | `POST` | `/contato/register` | create; errors flash + redirect back |
//! | `GET`  | `/contato/index/{id}` | edit form, pre-filled |
//! | `POST` | `/contato/edit/{id}` | full replace; errors flash + redirect back |
//! | `GET`  | `/contato/apagar/{id}` | delete, then redirect back |

use axum::{
  extract::{Path, RawForm, State},
  http::HeaderMap,
  response::{IntoResponse, Response},
};

use agenda_core::{ContatoStore, SaveOutcome};

use crate::{
  error::Error,
  flash::Sessions,
  handlers::{back_path, parse_form, redirect},
  views, AppState,
};

/// `GET /contato/index` — the blank create form. No store interaction.
pub async fn index<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
) -> Response
where
  S: ContatoStore + Clone + Send + Sync + 'static,
{
  let flash = state.sessions.take(Sessions::session_id(&headers));
  views::contato_form(&flash, None).into_response()
}

/// `POST /contato/register`
pub async fn register<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  RawForm(body): RawForm,
) -> Response
where
  S: ContatoStore + Clone + Send + Sync + 'static,
{
  let raw = parse_form(&body);
  match state.contatos.register(&raw).await {
    Ok(SaveOutcome::Saved(contato)) => {
      let (sid, cookie) = state.sessions.ensure(&headers);
      state
        .sessions
        .flash_success(sid, "Horario registrado com sucesso.");
      redirect(&format!("/contato/index/{}", contato.id), cookie)
    }
    Ok(SaveOutcome::Rejected(errors)) => {
      let (sid, cookie) = state.sessions.ensure(&headers);
      state.sessions.flash_errors(sid, errors);
      redirect(&back_path(&headers), cookie)
    }
    Err(e) => Error::Store(Box::new(e)).into_response(),
  }
}

/// `GET /contato/index/{id}` — the edit form, pre-filled with the record.
/// Malformed or unknown identifiers render the generic not-found page.
pub async fn edit_index<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Path(id): Path<String>,
) -> Response
where
  S: ContatoStore + Clone + Send + Sync + 'static,
{
  match state.contatos.find_by_id(&id).await {
    Ok(Some(contato)) => {
      let flash = state.sessions.take(Sessions::session_id(&headers));
      views::contato_form(&flash, Some(&contato)).into_response()
    }
    Ok(None) => Error::NotFound.into_response(),
    Err(e) => Error::Store(Box::new(e)).into_response(),
  }
}

/// `POST /contato/edit/{id}`
pub async fn edit<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Path(id): Path<String>,
  RawForm(body): RawForm,
) -> Response
where
  S: ContatoStore + Clone + Send + Sync + 'static,
{
  let raw = parse_form(&body);
  match state.contatos.edit(&id, &raw).await {
    Ok(Some(SaveOutcome::Saved(contato))) => {
      let (sid, cookie) = state.sessions.ensure(&headers);
      state
        .sessions
        .flash_success(sid, "Horario editado com sucesso.");
      redirect(&format!("/contato/index/{}", contato.id), cookie)
    }
    Ok(Some(SaveOutcome::Rejected(errors))) => {
      let (sid, cookie) = state.sessions.ensure(&headers);
      state.sessions.flash_errors(sid, errors);
      redirect(&back_path(&headers), cookie)
    }
    Ok(None) => Error::NotFound.into_response(),
    Err(e) => Error::Store(Box::new(e)).into_response(),
  }
}

/// `GET /contato/apagar/{id}`
pub async fn apagar<S>(
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  Path(id): Path<String>,
) -> Response
where
  S: ContatoStore + Clone + Send + Sync + 'static,
{
  match state.contatos.delete_by_id(&id).await {
    Ok(Some(_)) => {
      let (sid, cookie) = state.sessions.ensure(&headers);
      state
        .sessions
        .flash_success(sid, "Horario apagado com sucesso.");
      redirect(&back_path(&headers), cookie)
    }
    Ok(None) => Error::NotFound.into_response(),
    Err(e) => Error::Store(Box::new(e)).into_response(),
  }
}
