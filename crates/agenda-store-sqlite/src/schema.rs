//! SQL schema for the agenda SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS contatos (
    contato_id TEXT PRIMARY KEY,
    nome       TEXT NOT NULL,
    sobrenome  TEXT NOT NULL DEFAULT '',
    email      TEXT NOT NULL DEFAULT '',
    telefone   TEXT NOT NULL DEFAULT '',
    minhadata  TEXT NOT NULL,   -- ISO 8601, no zone
    criado_em  TEXT NOT NULL    -- RFC 3339 UTC; server-assigned
);

CREATE INDEX IF NOT EXISTS contatos_criado_idx ON contatos(criado_em);

PRAGMA user_version = 1;
";
