//! Server-rendered HTML
//!
//! Page shell shared by every view: Arabic, right-to-left, one inline
//! stylesheet. Views build their body with `format!` and pass it to
//! [`layout`]. Anything user-supplied must go through [`escape`] first.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Application title shown in the header and `<title>`.
pub const APP_NAME: &str = "نظام إدارة القضايا - الغالبي";

/// Escape text for use in element content and quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render an optional error banner.
pub fn error_banner(message: Option<&str>) -> String {
    message
        .map(|m| format!(r#"<div class="error" role="alert">{}</div>"#, escape(m)))
        .unwrap_or_default()
}

/// Wrap `body` in the page shell.
///
/// `signed_in_as` switches the header to the authenticated navigation
/// (dashboard, clients, logout).
pub fn layout(title: &str, signed_in_as: Option<&str>, body: &str) -> String {
    let nav = match signed_in_as {
        Some(who) => format!(
            r#"<nav>
    <a href="/dashboard">الرئيسية</a>
    <a href="/clients">الموكلين</a>
    <span class="who">{who}</span>
    <form method="post" action="/logout" class="inline"><button type="submit">تسجيل الخروج</button></form>
  </nav>"#,
            who = escape(who),
        ),
        None => r#"<nav>
    <a href="/login">تسجيل الدخول</a>
    <a href="/register">إنشاء حساب</a>
  </nav>"#
            .to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="ar" dir="rtl"><head>
<meta charset="utf-8"><meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title} - {app}</title>
<style>{style}</style>
</head><body>
<header>
  <strong>{app}</strong>
  {nav}
</header>
<main>
{body}
</main>
</body></html>"#,
        title = escape(title),
        app = APP_NAME,
        style = base_style(),
    )
}

/// Full error page with the given status.
pub fn error_page(status: StatusCode, message: &str) -> Response {
    let body = format!(
        r#"<div class="card">{banner}<p><a href="/">العودة</a></p></div>"#,
        banner = error_banner(Some(message)),
    );
    (status, Html(layout("خطأ", None, &body))).into_response()
}

fn base_style() -> &'static str {
    r#"
*{box-sizing:border-box}
body{margin:0;font-family:system-ui,-apple-system,"Segoe UI",Tahoma,sans-serif;background:#f4f5f7;color:#1f2933}
header{display:flex;justify-content:space-between;align-items:center;padding:12px 24px;background:#1f3a5f;color:#fff}
header a,header button{color:#fff;margin-inline-start:16px;text-decoration:none;background:none;border:0;font:inherit;cursor:pointer}
nav{display:flex;align-items:center}
.who{margin-inline-start:16px;opacity:.8}
.inline{display:inline}
main{max-width:880px;margin:32px auto;padding:0 16px}
.card{background:#fff;border-radius:8px;padding:24px;box-shadow:0 1px 3px rgba(0,0,0,.08)}
.form-group{margin-bottom:14px}
label{display:block;margin-bottom:4px;font-weight:600}
input,textarea{width:100%;padding:10px;border:1px solid #cbd2d9;border-radius:6px;font:inherit}
.btn{display:inline-block;padding:10px 18px;background:#1f3a5f;color:#fff;border:0;border-radius:6px;cursor:pointer;text-decoration:none;font:inherit}
.error{background:#fde8e8;color:#9b1c1c;padding:10px 14px;border-radius:6px;margin-bottom:14px}
.muted{color:#7b8794}
table{width:100%;border-collapse:collapse}
th,td{text-align:start;padding:10px;border-bottom:1px solid #e4e7eb}
"#
}
