//! Server-rendered web layer for the agenda contact book.
//!
//! Exposes an axum [`Router`] backed by any [`ContatoStore`]. Pages are
//! rendered HTML; user feedback travels as session-backed flash messages
//! across redirects.

pub mod error;
pub mod flash;
pub mod handlers;
pub mod views;

pub use error::Error;

use std::path::PathBuf;

use axum::{
  routing::{get, post},
  Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use agenda_core::{ContatoStore, Contatos};

use crate::flash::Sessions;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` plus
/// `AGENDA_*` environment overrides.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_host() -> String {
  "127.0.0.1".to_string()
}

fn default_port() -> u16 {
  3000
}

fn default_store_path() -> PathBuf {
  PathBuf::from("agenda.db3")
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: ContatoStore> {
  pub contatos: Contatos<S>,
  pub sessions: Sessions,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the application.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: ContatoStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/",                    get(handlers::home::index::<S>))
    .route("/contato/index",       get(handlers::contato::index::<S>))
    .route("/contato/index/{id}",  get(handlers::contato::edit_index::<S>))
    .route("/contato/register",    post(handlers::contato::register::<S>))
    .route("/contato/edit/{id}",   post(handlers::contato::edit::<S>))
    .route("/contato/apagar/{id}", get(handlers::contato::apagar::<S>))
    .fallback(handlers::nao_encontrada)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ───────────────────────────────────────────────────────
