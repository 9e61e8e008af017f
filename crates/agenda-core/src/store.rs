//! The `ContatoStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `agenda-store-sqlite`).
//! Higher layers (`agenda-web`) depend on this abstraction, not on any
//! concrete backend. Records are documents keyed by an opaque UUID; the store
//! assigns identifiers and creation timestamps.
//!
//! All methods return `Send` futures so the trait can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use uuid::Uuid;

use crate::contato::{Contato, NovoContato};

pub trait ContatoStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new contact. The store assigns the identifier and stamps
  /// `criado_em` with the current time.
  fn create(
    &self,
    novo: NovoContato,
  ) -> impl Future<Output = Result<Contato, Self::Error>> + Send + '_;

  /// Retrieve a contact by identifier. Returns `None` if not found.
  fn find_by_id(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contato>, Self::Error>> + Send + '_;

  /// Fully replace the five editable fields of the contact with `id`,
  /// preserving `criado_em`. Returns the updated record, or `None` if no
  /// record matched.
  fn replace(
    &self,
    id: Uuid,
    novo: NovoContato,
  ) -> impl Future<Output = Result<Option<Contato>, Self::Error>> + Send + '_;

  /// Remove the contact with `id` and return it, or `None` if no record
  /// matched.
  fn delete(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Contato>, Self::Error>> + Send + '_;

  /// All contacts, most recently created first.
  fn list_created_desc(
    &self,
  ) -> impl Future<Output = Result<Vec<Contato>, Self::Error>> + Send + '_;
}
