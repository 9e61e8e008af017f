//! `Contatos` — the service combining validation with persistence.
//!
//! Constructed with an injected store handle rather than binding to any
//! global state, so backends (and test doubles) are interchangeable.

use std::sync::Arc;

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
  contato::{normalize, validate, Contato, ContatoView},
  store::ContatoStore,
};

/// The outcome of a create or edit submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
  /// Validation passed and the record was written.
  Saved(Contato),
  /// Validation failed; nothing was written.
  Rejected(Vec<String>),
}

/// Repository facade over a [`ContatoStore`].
///
/// Cloning is cheap — the store handle is reference-counted.
pub struct Contatos<S> {
  store: Arc<S>,
}

impl<S> Clone for Contatos<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store) }
  }
}

impl<S> Contatos<S>
where
  S: ContatoStore,
{
  pub fn new(store: Arc<S>) -> Self {
    Self { store }
  }

  /// Validate `raw` and create a new contact.
  pub async fn register(
    &self,
    raw: &Map<String, Value>,
  ) -> Result<SaveOutcome, S::Error> {
    match validate(normalize(raw)) {
      Ok(novo) => Ok(SaveOutcome::Saved(self.store.create(novo).await?)),
      Err(errors) => Ok(SaveOutcome::Rejected(errors)),
    }
  }

  /// Validate `raw` and fully replace the editable fields of contact `id`.
  ///
  /// A malformed identifier behaves exactly like a missing record: `None`,
  /// with no validation run and no store access. Callers must treat both
  /// the same way.
  pub async fn edit(
    &self,
    id: &str,
    raw: &Map<String, Value>,
  ) -> Result<Option<SaveOutcome>, S::Error> {
    let Some(id) = parse_id(id) else {
      return Ok(None);
    };
    match validate(normalize(raw)) {
      Ok(novo) => {
        Ok(self.store.replace(id, novo).await?.map(SaveOutcome::Saved))
      }
      Err(errors) => Ok(Some(SaveOutcome::Rejected(errors))),
    }
  }

  /// Look up one contact. Malformed identifiers resolve to `None` without
  /// touching the store.
  pub async fn find_by_id(&self, id: &str) -> Result<Option<Contato>, S::Error> {
    match parse_id(id) {
      Some(id) => self.store.find_by_id(id).await,
      None => Ok(None),
    }
  }

  /// All contacts, most recently created first, as display-ready views.
  pub async fn list_all(&self) -> Result<Vec<ContatoView>, S::Error> {
    let contatos = self.store.list_created_desc().await?;
    Ok(contatos.iter().map(Contato::view).collect())
  }

  /// Remove one contact and return it. Malformed identifiers resolve to
  /// `None` without touching the store.
  pub async fn delete_by_id(
    &self,
    id: &str,
  ) -> Result<Option<Contato>, S::Error> {
    match parse_id(id) {
      Some(id) => self.store.delete(id).await,
      None => Ok(None),
    }
  }
}

/// A well-formed identifier is a hyphenated UUID — the store's native key
/// format. Anything else is treated as "not found", never as an error.
fn parse_id(id: &str) -> Option<Uuid> {
  Uuid::try_parse(id).ok()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
