//! Client pages

use auth::CurrentUser;
use platform::html::{error_banner, escape, layout};

use crate::domain::entity::Client;
use crate::error::ClientError;
use crate::presentation::dto::NewClientForm;

pub const MSG_GENERIC: &str = "صار خطأ.";
pub const MSG_NAME_REQUIRED: &str = "اسم الموكل مطلوب.";
pub const MSG_NAME_TOO_LONG: &str = "اسم الموكل طويل جدًا.";

pub fn error_message(err: &ClientError) -> &'static str {
    match err {
        ClientError::NameRequired => MSG_NAME_REQUIRED,
        ClientError::NameTooLong { .. } => MSG_NAME_TOO_LONG,
        _ => MSG_GENERIC,
    }
}

fn cell(value: Option<&str>) -> String {
    value.map(escape).unwrap_or_else(|| "-".to_string())
}

pub fn list_page(user: &CurrentUser, clients: &[Client]) -> String {
    let content = if clients.is_empty() {
        r#"<p class="muted">لا يوجد موكلين بعد.</p>"#.to_string()
    } else {
        let rows: String = clients
            .iter()
            .map(|c| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    escape(c.full_name.as_str()),
                    cell(c.email.as_deref()),
                    cell(c.phone.as_deref()),
                    cell(c.notes.as_deref()),
                    c.created_at.format("%Y-%m-%d"),
                )
            })
            .collect();
        format!(
            r#"<table class="table">
<thead><tr><th>الاسم</th><th>الإيميل</th><th>الجوال</th><th>ملاحظات</th><th>تاريخ الإضافة</th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#
        )
    };

    let body = format!(
        r#"<section class="card">
<h1>الموكلين</h1>
<p><a class="btn" href="/clients/new">إضافة موكل</a></p>
{content}
</section>"#
    );
    layout("الموكلين", Some(user.label()), &body)
}

pub fn new_page(user: &CurrentUser, error: Option<&str>, form: &NewClientForm) -> String {
    let body = format!(
        r#"<section class="card">
<h1>إضافة موكل</h1>
{banner}
<form method="post" action="/clients/new">
  <div class="form-group">
    <label for="fullName">الاسم الكامل</label>
    <input id="fullName" name="fullName" type="text" value="{full_name}" required>
  </div>
  <div class="form-group">
    <label for="email">الإيميل</label>
    <input id="email" name="email" type="email" value="{email}">
  </div>
  <div class="form-group">
    <label for="phone">الجوال</label>
    <input id="phone" name="phone" type="tel" value="{phone}">
  </div>
  <div class="form-group">
    <label for="notes">ملاحظات</label>
    <textarea id="notes" name="notes">{notes}</textarea>
  </div>
  <button class="btn" type="submit">حفظ</button>
</form>
<p class="muted"><a href="/clients">رجوع للقائمة</a></p>
</section>"#,
        banner = error_banner(error),
        full_name = escape(&form.full_name),
        email = escape(&form.email),
        phone = escape(&form.phone),
        notes = escape(&form.notes),
    );
    layout("إضافة موكل", Some(user.label()), &body)
}
