//! Core types and trait definitions for the agenda contact book.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod contato;
pub mod contatos;
pub mod store;

pub use contato::{Contato, ContatoFields, ContatoView, NovoContato};
pub use contatos::{Contatos, SaveOutcome};
pub use store::ContatoStore;
