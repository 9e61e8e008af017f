//! Session-backed flash messages shown once on the next rendered page.
//!
//! Only the session id travels in the cookie; pending messages live in an
//! in-process map and are removed when rendered, so they survive exactly one
//! redirect.

use std::{
  collections::HashMap,
  sync::{Arc, Mutex},
};

use axum::http::{header, HeaderMap, HeaderValue};
use uuid::Uuid;

const COOKIE_NAME: &str = "agenda_sessao";

/// One-shot messages accumulated for a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flash {
  pub errors:  Vec<String>,
  pub success: Option<String>,
}

impl Flash {
  pub fn is_empty(&self) -> bool {
    self.errors.is_empty() && self.success.is_none()
  }
}

/// In-process flash storage keyed by session id.
#[derive(Clone, Default)]
pub struct Sessions {
  inner: Arc<Mutex<HashMap<Uuid, Flash>>>,
}

impl Sessions {
  pub fn new() -> Self {
    Self::default()
  }

  /// Session id from the request's cookie header, if present and
  /// well-formed.
  pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
      let (name, value) = pair.trim().split_once('=')?;
      if name == COOKIE_NAME {
        Uuid::try_parse(value).ok()
      } else {
        None
      }
    })
  }

  /// Existing session id, or a fresh one together with the `Set-Cookie`
  /// value that introduces it to the browser.
  pub fn ensure(&self, headers: &HeaderMap) -> (Uuid, Option<HeaderValue>) {
    if let Some(sid) = Self::session_id(headers) {
      return (sid, None);
    }
    let sid = Uuid::new_v4();
    let cookie = HeaderValue::from_str(&format!(
      "{COOKIE_NAME}={sid}; Path=/; HttpOnly"
    ))
    .ok();
    (sid, cookie)
  }

  /// Queue validation errors for the next rendered page.
  pub fn flash_errors(&self, sid: Uuid, errors: Vec<String>) {
    let mut inner = self.inner.lock().unwrap();
    inner.entry(sid).or_default().errors.extend(errors);
  }

  /// Queue a success message for the next rendered page.
  pub fn flash_success(&self, sid: Uuid, message: impl Into<String>) {
    let mut inner = self.inner.lock().unwrap();
    inner.entry(sid).or_default().success = Some(message.into());
  }

  /// Remove and return pending messages; each message is shown exactly once.
  pub fn take(&self, sid: Option<Uuid>) -> Flash {
    let Some(sid) = sid else {
      return Flash::default();
    };
    self.inner.lock().unwrap().remove(&sid).unwrap_or_default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn headers_with_cookie(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
    headers
  }

  #[test]
  fn session_id_reads_the_cookie() {
    let sid = Uuid::new_v4();
    let headers =
      headers_with_cookie(&format!("outra=1; {COOKIE_NAME}={sid}; x=2"));
    assert_eq!(Sessions::session_id(&headers), Some(sid));
  }

  #[test]
  fn session_id_ignores_malformed_values() {
    let headers = headers_with_cookie(&format!("{COOKIE_NAME}=not-a-uuid"));
    assert_eq!(Sessions::session_id(&headers), None);
    assert_eq!(Sessions::session_id(&HeaderMap::new()), None);
  }

  #[test]
  fn ensure_mints_a_cookie_only_once() {
    let sessions = Sessions::new();

    let (sid, cookie) = sessions.ensure(&HeaderMap::new());
    let cookie = cookie.expect("fresh session must set a cookie");
    let headers = headers_with_cookie(cookie.to_str().unwrap());

    let (again, none) = sessions.ensure(&headers);
    assert_eq!(again, sid);
    assert!(none.is_none());
  }

  #[test]
  fn take_consumes_messages() {
    let sessions = Sessions::new();
    let sid = Uuid::new_v4();

    sessions.flash_errors(sid, vec!["erro".to_string()]);
    sessions.flash_success(sid, "feito");

    let flash = sessions.take(Some(sid));
    assert_eq!(flash.errors, vec!["erro".to_string()]);
    assert_eq!(flash.success.as_deref(), Some("feito"));

    assert!(sessions.take(Some(sid)).is_empty());
    assert!(sessions.take(None).is_empty());
  }
}
