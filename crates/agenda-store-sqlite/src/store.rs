//! [`SqliteStore`] — the SQLite implementation of [`ContatoStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use agenda_core::{Contato, ContatoStore, NovoContato};

use crate::{
  encode::{encode_data, encode_dt, encode_uuid, RawContato},
  schema::SCHEMA,
  Error, Result,
};

const COLUMNS: &str =
  "contato_id, nome, sobrenome, email, telefone, minhadata, criado_em";

fn raw_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawContato> {
  Ok(RawContato {
    contato_id: row.get(0)?,
    nome:       row.get(1)?,
    sobrenome:  row.get(2)?,
    email:      row.get(3)?,
    telefone:   row.get(4)?,
    minhadata:  row.get(5)?,
    criado_em:  row.get(6)?,
  })
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── Trait implementation ────────────────────────────────────────────────────

impl ContatoStore for SqliteStore {
  type Error = Error;

  async fn create(&self, novo: NovoContato) -> Result<Contato> {
    let contato = Contato {
      id:        Uuid::new_v4(),
      nome:      novo.nome,
      sobrenome: novo.sobrenome,
      email:     novo.email,
      telefone:  novo.telefone,
      minhadata: novo.minhadata,
      criado_em: Utc::now(),
    };

    let id_str    = encode_uuid(contato.id);
    let nome      = contato.nome.clone();
    let sobrenome = contato.sobrenome.clone();
    let email     = contato.email.clone();
    let telefone  = contato.telefone.clone();
    let data_str  = encode_data(contato.minhadata);
    let em_str    = encode_dt(contato.criado_em);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contatos (contato_id, nome, sobrenome, email, telefone, minhadata, criado_em)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![
            id_str, nome, sobrenome, email, telefone, data_str, em_str
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(contato)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Contato>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawContato> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {COLUMNS} FROM contatos WHERE contato_id = ?1"),
              rusqlite::params![id_str],
              raw_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContato::into_contato).transpose()
  }

  async fn replace(
    &self,
    id: Uuid,
    novo: NovoContato,
  ) -> Result<Option<Contato>> {
    let id_str   = encode_uuid(id);
    let data_str = encode_data(novo.minhadata);

    let raw: Option<RawContato> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE contatos
           SET nome = ?2, sobrenome = ?3, email = ?4, telefone = ?5, minhadata = ?6
           WHERE contato_id = ?1",
          rusqlite::params![
            id_str, novo.nome, novo.sobrenome, novo.email, novo.telefone,
            data_str
          ],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(
          conn
            .query_row(
              &format!("SELECT {COLUMNS} FROM contatos WHERE contato_id = ?1"),
              rusqlite::params![id_str],
              raw_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContato::into_contato).transpose()
  }

  async fn delete(&self, id: Uuid) -> Result<Option<Contato>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawContato> = self
      .conn
      .call(move |conn| {
        let existing = conn
          .query_row(
            &format!("SELECT {COLUMNS} FROM contatos WHERE contato_id = ?1"),
            rusqlite::params![id_str],
            raw_from_row,
          )
          .optional()?;

        if existing.is_some() {
          conn.execute(
            "DELETE FROM contatos WHERE contato_id = ?1",
            rusqlite::params![id_str],
          )?;
        }

        Ok(existing)
      })
      .await?;

    raw.map(RawContato::into_contato).transpose()
  }

  async fn list_created_desc(&self) -> Result<Vec<Contato>> {
    // rowid breaks ties so same-instant creations still list newest-first.
    let raws: Vec<RawContato> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {COLUMNS} FROM contatos ORDER BY criado_em DESC, rowid DESC"
        ))?;
        let rows = stmt.query_map([], raw_from_row)?;

        let mut out = Vec::new();
        for row in rows {
          out.push(row?);
        }
        Ok(out)
      })
      .await?;

    raws.into_iter().map(RawContato::into_contato).collect()
  }
}
