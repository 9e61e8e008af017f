//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! `criado_em` is stored as an RFC 3339 string, `minhadata` as a zone-less
//! ISO 8601 string. UUIDs are stored as hyphenated lowercase strings.

use chrono::{DateTime, NaiveDateTime, Utc};
use uuid::Uuid;

use agenda_core::Contato;

use crate::{Error, Result};

const MINHADATA_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── Timestamps ──────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

pub fn encode_data(dt: NaiveDateTime) -> String {
  dt.format(MINHADATA_FORMAT).to_string()
}

pub fn decode_data(s: &str) -> Result<NaiveDateTime> {
  NaiveDateTime::parse_from_str(s, MINHADATA_FORMAT)
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw strings read directly from a `contatos` row.
pub struct RawContato {
  pub contato_id: String,
  pub nome:       String,
  pub sobrenome:  String,
  pub email:      String,
  pub telefone:   String,
  pub minhadata:  String,
  pub criado_em:  String,
}

impl RawContato {
  pub fn into_contato(self) -> Result<Contato> {
    Ok(Contato {
      id:        decode_uuid(&self.contato_id)?,
      nome:      self.nome,
      sobrenome: self.sobrenome,
      email:     self.email,
      telefone:  self.telefone,
      minhadata: decode_data(&self.minhadata)?,
      criado_em: decode_dt(&self.criado_em)?,
    })
  }
}
