//! Contact records and the validation pass applied to form submissions.
//!
//! A submission arrives as a loose string map, is normalized into
//! [`ContatoFields`], and only becomes a write-ready [`NovoContato`] if every
//! validation rule passes. The persisted [`Contato`] is produced by the store,
//! which assigns the identifier and the creation timestamp.

use chrono::{DateTime, NaiveDateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

// ─── Date formats ────────────────────────────────────────────────────────────

/// Shapes accepted on input. `datetime-local` inputs submit the first form;
/// seconds and fractional seconds are tolerated.
const INPUT_FORMATS: &[&str] = &[
  "%Y-%m-%dT%H:%M",
  "%Y-%m-%dT%H:%M:%S",
  "%Y-%m-%dT%H:%M:%S%.f",
];

/// Listing display shape: `31/12/2024 09:30`.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Edit-form pre-population shape, matching what `datetime-local` expects.
pub const FORM_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Lenient parse of a submitted date/time. `None` means missing-or-garbage;
/// the required-field rule treats both the same way.
pub fn parse_data(s: &str) -> Option<NaiveDateTime> {
  INPUT_FORMATS
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A persisted contact with its scheduled date and time.
///
/// `id` and `criado_em` are assigned by the store at creation and never
/// change; the remaining five fields are fully replaced on every edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contato {
  pub id:        Uuid,
  pub nome:      String,
  pub sobrenome: String,
  pub email:     String,
  pub telefone:  String,
  pub minhadata: NaiveDateTime,
  pub criado_em: DateTime<Utc>,
}

impl Contato {
  /// The listing read model for this record, with `minhadata` formatted for
  /// display.
  pub fn view(&self) -> ContatoView {
    ContatoView {
      id:        self.id,
      nome:      self.nome.clone(),
      sobrenome: self.sobrenome.clone(),
      email:     self.email.clone(),
      telefone:  self.telefone.clone(),
      minhadata: self.minhadata.format(DISPLAY_FORMAT).to_string(),
      criado_em: self.criado_em,
    }
  }

  /// `minhadata` in the shape the edit form expects.
  pub fn minhadata_form(&self) -> String {
    self.minhadata.format(FORM_FORMAT).to_string()
  }
}

/// A contact as shown in listings. `minhadata` is pre-formatted
/// (`DD/MM/YYYY HH:mm`) and must never be written back to the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContatoView {
  pub id:        Uuid,
  pub nome:      String,
  pub sobrenome: String,
  pub email:     String,
  pub telefone:  String,
  pub minhadata: String,
  pub criado_em: DateTime<Utc>,
}

// ─── Normalization ───────────────────────────────────────────────────────────

/// The canonical field set of a submission, before validation.
///
/// `minhadata: None` covers both an absent field and one that failed to
/// parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContatoFields {
  pub nome:      String,
  pub sobrenome: String,
  pub email:     String,
  pub telefone:  String,
  pub minhadata: Option<NaiveDateTime>,
}

/// Coerce a raw submission into the canonical field set.
///
/// Values that are not strings are replaced with an empty string and fields
/// outside the canonical set are dropped. Side-effect free; normalizing an
/// already-normalized submission changes nothing.
pub fn normalize(raw: &Map<String, Value>) -> ContatoFields {
  ContatoFields {
    nome:      string_field(raw, "nome"),
    sobrenome: string_field(raw, "sobrenome"),
    email:     string_field(raw, "email"),
    telefone:  string_field(raw, "telefone"),
    minhadata: raw
      .get("minhadata")
      .and_then(Value::as_str)
      .and_then(parse_data),
  }
}

fn string_field(raw: &Map<String, Value>, key: &str) -> String {
  match raw.get(key) {
    Some(Value::String(s)) => s.clone(),
    _ => String::new(),
  }
}

// ─── Validation ──────────────────────────────────────────────────────────────

/// The validated write model — the only shape the store accepts for create
/// and replace operations.
#[derive(Debug, Clone, PartialEq)]
pub struct NovoContato {
  pub nome:      String,
  pub sobrenome: String,
  pub email:     String,
  pub telefone:  String,
  pub minhadata: NaiveDateTime,
}

/// Run the validation pass over normalized fields.
///
/// Rules are evaluated independently — every violated rule contributes its
/// message, in a fixed order. An empty error list yields the write model.
pub fn validate(fields: ContatoFields) -> Result<NovoContato, Vec<String>> {
  let mut errors = Vec::new();

  if !fields.email.is_empty() && !EmailAddress::is_valid(&fields.email) {
    errors.push("E-mail inválido".to_string());
  }
  if fields.nome.is_empty() {
    errors.push("Nome é um campo obrigatório.".to_string());
  }
  if fields.email.is_empty() && fields.telefone.is_empty() {
    errors.push(
      "Pelo menos um contato precisa ser enviado: e-mail ou telefone."
        .to_string(),
    );
  }
  if fields.minhadata.is_none() {
    errors.push("Data e hora é um campo obrigatório.".to_string());
  }

  match (errors.is_empty(), fields.minhadata) {
    (true, Some(minhadata)) => Ok(NovoContato {
      nome: fields.nome,
      sobrenome: fields.sobrenome,
      email: fields.email,
      telefone: fields.telefone,
      minhadata,
    }),
    _ => Err(errors),
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
