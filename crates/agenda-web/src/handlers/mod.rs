//! Request handlers adapting HTTP to the contact service.

pub mod contato;
pub mod home;

use axum::{
  http::{header, HeaderMap, HeaderValue},
  response::{IntoResponse, Redirect, Response},
};
use bytes::Bytes;
use serde_json::{Map, Value};

use crate::views;

/// Decode an urlencoded body into a JSON-shaped submission map.
///
/// Repeated keys collapse into arrays — normalization downstream coerces any
/// non-string value to an empty string, so a doubled field never reaches the
/// store.
pub fn parse_form(body: &Bytes) -> Map<String, Value> {
  let pairs: Vec<(String, String)> =
    serde_urlencoded::from_bytes(body).unwrap_or_default();

  let mut map = Map::new();
  for (key, value) in pairs {
    match map.get_mut(&key) {
      None => {
        map.insert(key, Value::String(value));
      }
      Some(Value::Array(items)) => items.push(Value::String(value)),
      Some(existing) => {
        let prev = existing.take();
        *existing = Value::Array(vec![prev, Value::String(value)]);
      }
    }
  }
  map
}

/// `Referer`-based redirect target; `/` when the header is unusable.
pub fn back_path(headers: &HeaderMap) -> String {
  headers
    .get(header::REFERER)
    .and_then(|v| v.to_str().ok())
    .unwrap_or("/")
    .to_string()
}

/// A redirect that also delivers a freshly minted session cookie, when one
/// was needed.
pub fn redirect(to: &str, cookie: Option<HeaderValue>) -> Response {
  let mut response = Redirect::to(to).into_response();
  if let Some(cookie) = cookie {
    response.headers_mut().insert(header::SET_COOKIE, cookie);
  }
  response
}

/// Fallback for unmatched paths — including operations missing their
/// identifier segment.
pub async fn nao_encontrada() -> Response {
  views::nao_encontrada().into_response()
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn parse_form_decodes_fields() {
    let body = Bytes::from_static(
      b"nome=Ana&email=ana%40x.com&minhadata=2024-05-01T10%3A00",
    );
    let map = parse_form(&body);
    assert_eq!(map.get("nome"), Some(&json!("Ana")));
    assert_eq!(map.get("email"), Some(&json!("ana@x.com")));
    assert_eq!(map.get("minhadata"), Some(&json!("2024-05-01T10:00")));
  }

  #[test]
  fn parse_form_collapses_repeated_keys_into_arrays() {
    let body = Bytes::from_static(b"nome=Ana&nome=Bia&nome=Cora");
    let map = parse_form(&body);
    assert_eq!(map.get("nome"), Some(&json!(["Ana", "Bia", "Cora"])));
  }

  #[test]
  fn parse_form_tolerates_garbage() {
    assert!(parse_form(&Bytes::from_static(b"\xff\xfe")).is_empty());
  }

  #[test]
  fn back_path_falls_back_to_root() {
    assert_eq!(back_path(&HeaderMap::new()), "/");

    let mut headers = HeaderMap::new();
    headers
      .insert(header::REFERER, HeaderValue::from_static("/contato/index"));
    assert_eq!(back_path(&headers), "/contato/index");
  }
}
