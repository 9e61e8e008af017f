//! Integration tests for `SqliteStore` against an in-memory database.

use agenda_core::{contato::parse_data, ContatoStore, NovoContato};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn novo(nome: &str, data: &str) -> NovoContato {
  NovoContato {
    nome:      nome.to_string(),
    sobrenome: String::new(),
    email:     format!("{}@exemplo.com", nome.to_lowercase()),
    telefone:  String::new(),
    minhadata: parse_data(data).expect("test date"),
  }
}

// ─── Create / find ───────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_find_round_trip() {
  let s = store().await;

  let created = s.create(novo("Ana", "2024-05-01T10:00")).await.unwrap();
  assert_eq!(created.nome, "Ana");

  let fetched = s.find_by_id(created.id).await.unwrap().unwrap();
  assert_eq!(fetched, created);
  assert_eq!(fetched.minhadata, parse_data("2024-05-01T10:00").unwrap());
}

#[tokio::test]
async fn find_missing_returns_none() {
  let s = store().await;
  assert!(s.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn minhadata_survives_storage_with_seconds() {
  let s = store().await;
  let created = s.create(novo("Ana", "2024-05-01T10:00:30")).await.unwrap();
  let fetched = s.find_by_id(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.minhadata, parse_data("2024-05-01T10:00:30").unwrap());
}

// ─── Replace ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn replace_overwrites_every_editable_field() {
  let s = store().await;
  let created = s
    .create(NovoContato {
      nome:      "Ana".to_string(),
      sobrenome: "Braga".to_string(),
      email:     "ana@exemplo.com".to_string(),
      telefone:  String::new(),
      minhadata: parse_data("2024-05-01T10:00").unwrap(),
    })
    .await
    .unwrap();

  let updated = s
    .replace(created.id, NovoContato {
      nome:      "Ana B.".to_string(),
      sobrenome: String::new(),
      email:     String::new(),
      telefone:  "555-1234".to_string(),
      minhadata: parse_data("2024-06-01T09:00").unwrap(),
    })
    .await
    .unwrap()
    .unwrap();

  assert_eq!(updated.id, created.id);
  assert_eq!(updated.nome, "Ana B.");
  assert_eq!(updated.sobrenome, "");
  assert_eq!(updated.email, "");
  assert_eq!(updated.telefone, "555-1234");
  assert_eq!(updated.minhadata, parse_data("2024-06-01T09:00").unwrap());
  assert_eq!(updated.criado_em, created.criado_em);
}

#[tokio::test]
async fn replace_missing_returns_none() {
  let s = store().await;
  let result = s
    .replace(Uuid::new_v4(), novo("Ana", "2024-05-01T10:00"))
    .await
    .unwrap();
  assert!(result.is_none());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_returns_record_then_gone() {
  let s = store().await;
  let created = s.create(novo("Ana", "2024-05-01T10:00")).await.unwrap();

  let removed = s.delete(created.id).await.unwrap().unwrap();
  assert_eq!(removed, created);

  assert!(s.find_by_id(created.id).await.unwrap().is_none());
  assert!(s.delete(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_returns_none() {
  let s = store().await;
  assert!(s.delete(Uuid::new_v4()).await.unwrap().is_none());
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_is_newest_first() {
  let s = store().await;

  let primeira = s.create(novo("Primeira", "2024-05-01T10:00")).await.unwrap();
  let segunda  = s.create(novo("Segunda", "2024-05-02T11:00")).await.unwrap();
  let terceira = s.create(novo("Terceira", "2024-05-03T12:00")).await.unwrap();

  let listed = s.list_created_desc().await.unwrap();
  let ids: Vec<_> = listed.iter().map(|c| c.id).collect();
  assert_eq!(ids, vec![terceira.id, segunda.id, primeira.id]);
}

#[tokio::test]
async fn list_empty_store_is_empty() {
  let s = store().await;
  assert!(s.list_created_desc().await.unwrap().is_empty());
}
