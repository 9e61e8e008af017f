//! HTML views for the agenda pages.
//!
//! The pages are small enough to assemble with format strings; user-supplied
//! values are escaped for both text and attribute positions. Flash messages
//! render at the top of every page.

use axum::{http::StatusCode, response::Html};

use agenda_core::{Contato, ContatoView};

use crate::flash::Flash;

/// Escape a value for HTML text and double-quoted attribute positions.
pub fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(c),
    }
  }
  out
}

fn flash_html(flash: &Flash) -> String {
  let mut out = String::new();
  if !flash.errors.is_empty() {
    out.push_str("<ul class=\"errors\">\n");
    for error in &flash.errors {
      out.push_str(&format!("  <li>{}</li>\n", escape(error)));
    }
    out.push_str("</ul>\n");
  }
  if let Some(success) = &flash.success {
    out.push_str(&format!("<p class=\"success\">{}</p>\n", escape(success)));
  }
  out
}

fn page(title: &str, flash: &Flash, body: &str) -> String {
  format!(
    "<!DOCTYPE html>\n\
     <html lang=\"pt-BR\">\n\
     <head><meta charset=\"utf-8\"><title>{title} — Agenda</title></head>\n\
     <body>\n{flash}{body}\n</body>\n\
     </html>\n",
    title = escape(title),
    flash = flash_html(flash),
    body = body,
  )
}

/// The create/edit form. `Some(contato)` pre-fills the fields and posts to
/// the edit route; `None` renders the blank create form.
pub fn contato_form(flash: &Flash, contato: Option<&Contato>) -> Html<String> {
  let (action, nome, sobrenome, email, telefone, minhadata) = match contato {
    Some(c) => (
      format!("/contato/edit/{}", c.id),
      escape(&c.nome),
      escape(&c.sobrenome),
      escape(&c.email),
      escape(&c.telefone),
      c.minhadata_form(),
    ),
    None => (
      "/contato/register".to_string(),
      String::new(),
      String::new(),
      String::new(),
      String::new(),
      String::new(),
    ),
  };

  let body = format!(
    "<h1>Contato</h1>\n\
     <form action=\"{action}\" method=\"POST\">\n\
       <label>Nome <input type=\"text\" name=\"nome\" value=\"{nome}\"></label>\n\
       <label>Sobrenome <input type=\"text\" name=\"sobrenome\" value=\"{sobrenome}\"></label>\n\
       <label>E-mail <input type=\"text\" name=\"email\" value=\"{email}\"></label>\n\
       <label>Telefone <input type=\"text\" name=\"telefone\" value=\"{telefone}\"></label>\n\
       <label>Data e hora <input type=\"datetime-local\" name=\"minhadata\" value=\"{minhadata}\"></label>\n\
       <button type=\"submit\">Enviar</button>\n\
     </form>\n\
     <p><a href=\"/\">Voltar</a></p>"
  );

  Html(page("Contato", flash, &body))
}

/// The home listing — every contact, newest first, dates pre-formatted.
pub fn listagem(flash: &Flash, contatos: &[ContatoView]) -> Html<String> {
  let mut rows = String::new();
  for c in contatos {
    rows.push_str(&format!(
      "    <tr>\
       <td><a href=\"/contato/index/{id}\">{nome} {sobrenome}</a></td>\
       <td>{email}</td>\
       <td>{telefone}</td>\
       <td>{minhadata}</td>\
       <td><a href=\"/contato/apagar/{id}\">Apagar</a></td>\
       </tr>\n",
      id = c.id,
      nome = escape(&c.nome),
      sobrenome = escape(&c.sobrenome),
      email = escape(&c.email),
      telefone = escape(&c.telefone),
      minhadata = escape(&c.minhadata),
    ));
  }

  let body = format!(
    "<h1>Contatos</h1>\n\
     <p><a href=\"/contato/index\">Novo contato</a></p>\n\
     <table>\n\
       <thead><tr><th>Nome</th><th>E-mail</th><th>Telefone</th><th>Data e hora</th><th></th></tr></thead>\n\
       <tbody>\n{rows}  </tbody>\n\
     </table>"
  );

  Html(page("Contatos", flash, &body))
}

/// The generic not-found/error page.
pub fn nao_encontrada() -> (StatusCode, Html<String>) {
  let body = "<h1>Página não encontrada</h1>\n<p><a href=\"/\">Voltar</a></p>";
  (
    StatusCode::NOT_FOUND,
    Html(page("Página não encontrada", &Flash::default(), body)),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn escape_covers_markup_characters() {
    assert_eq!(
      escape(r#"<b>"A&B"</b> 'x'"#),
      "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt; &#39;x&#39;"
    );
  }

  #[test]
  fn form_escapes_user_values() {
    let contato = Contato {
      id:        uuid::Uuid::new_v4(),
      nome:      "<script>".to_string(),
      sobrenome: String::new(),
      email:     "a\"b@x.com".to_string(),
      telefone:  String::new(),
      minhadata: agenda_core::contato::parse_data("2024-05-01T10:00").unwrap(),
      criado_em: chrono::Utc::now(),
    };
    let Html(html) = contato_form(&Flash::default(), Some(&contato));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("a&quot;b@x.com"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("value=\"2024-05-01T10:00\""));
  }
}
