//! Auth pages and user-facing messages

use platform::html::{error_banner, escape, layout};

use crate::error::AuthError;
use crate::presentation::middleware::CurrentUser;

pub const MSG_GENERIC: &str = "صار خطأ.";
pub const MSG_INVALID_CREDENTIALS: &str = "بيانات الدخول غير صحيحة.";
pub const MSG_PASSWORD_TOO_SHORT: &str = "كلمة المرور لازم 8 أحرف على الأقل.";
pub const MSG_PASSWORD_TOO_LONG: &str = "كلمة المرور طويلة جدًا.";
pub const MSG_EMAIL_TAKEN: &str = "هذا الإيميل مسجل مسبقًا. جرّب تسجيل الدخول.";
pub const MSG_INVALID_EMAIL: &str = "صيغة الإيميل غير صحيحة.";

pub fn register_domain_message(domain: &str) -> String {
    format!("التسجيل متاح فقط لإيميلات @{domain}")
}

pub fn login_domain_message(domain: &str) -> String {
    format!("الدخول متاح فقط لإيميلات @{domain}")
}

/// Banner text for a rejected registration.
pub fn register_error_message(err: &AuthError) -> String {
    match err {
        AuthError::DomainNotAllowed { domain } => register_domain_message(domain),
        AuthError::InvalidEmail => MSG_INVALID_EMAIL.to_string(),
        AuthError::PasswordTooShort { .. } => MSG_PASSWORD_TOO_SHORT.to_string(),
        AuthError::PasswordTooLong { .. } => MSG_PASSWORD_TOO_LONG.to_string(),
        AuthError::EmailTaken => MSG_EMAIL_TAKEN.to_string(),
        _ => MSG_GENERIC.to_string(),
    }
}

/// Banner text for a rejected login. Only the domain gate is specific.
pub fn login_error_message(err: &AuthError) -> String {
    match err {
        AuthError::DomainNotAllowed { domain } => login_domain_message(domain),
        AuthError::InvalidCredentials => MSG_INVALID_CREDENTIALS.to_string(),
        _ => MSG_GENERIC.to_string(),
    }
}

pub fn register_page(error: Option<&str>, email: &str, name: &str, domain: &str) -> String {
    let body = format!(
        r#"<section class="card">
<h1>إنشاء حساب</h1>
{banner}
<form method="post" action="/register">
  <div class="form-group">
    <label for="name">الاسم</label>
    <input id="name" name="name" type="text" value="{name}">
  </div>
  <div class="form-group">
    <label for="email">الإيميل</label>
    <input id="email" name="email" type="email" value="{email}" placeholder="name@{domain}" required>
  </div>
  <div class="form-group">
    <label for="password">كلمة المرور</label>
    <input id="password" name="password" type="password" minlength="8" required>
  </div>
  <button class="btn" type="submit">تسجيل</button>
</form>
<p class="muted">عندك حساب؟ <a href="/login">تسجيل الدخول</a></p>
</section>"#,
        banner = error_banner(error),
        name = escape(name),
        email = escape(email),
        domain = escape(domain),
    );
    layout("إنشاء حساب", None, &body)
}

pub fn login_page(error: Option<&str>, email: &str, domain: &str) -> String {
    let body = format!(
        r#"<section class="card">
<h1>تسجيل الدخول</h1>
{banner}
<form method="post" action="/login">
  <div class="form-group">
    <label for="email">الإيميل</label>
    <input id="email" name="email" type="email" value="{email}" placeholder="name@{domain}" required>
  </div>
  <div class="form-group">
    <label for="password">كلمة المرور</label>
    <input id="password" name="password" type="password" required>
  </div>
  <button class="btn" type="submit">دخول</button>
</form>
<p class="muted">ما عندك حساب؟ <a href="/register">إنشاء حساب</a></p>
</section>"#,
        banner = error_banner(error),
        email = escape(email),
        domain = escape(domain),
    );
    layout("تسجيل الدخول", None, &body)
}

pub fn dashboard_page(user: &CurrentUser) -> String {
    let body = format!(
        r#"<section class="card">
<h1>أهلًا {who}</h1>
<p class="muted">{email}</p>
<p><a class="btn" href="/clients">الموكلين</a> <a class="btn" href="/clients/new">إضافة موكل</a></p>
</section>"#,
        who = escape(user.label()),
        email = escape(&user.email),
    );
    layout("الرئيسية", Some(user.label()), &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_messages() {
        let err = AuthError::DomainNotAllowed {
            domain: "alghalbilaw.com".to_string(),
        };
        assert_eq!(
            register_error_message(&err),
            "التسجيل متاح فقط لإيميلات @alghalbilaw.com"
        );
        assert_eq!(
            register_error_message(&AuthError::PasswordTooShort { min: 8 }),
            MSG_PASSWORD_TOO_SHORT
        );
        assert_eq!(register_error_message(&AuthError::EmailTaken), MSG_EMAIL_TAKEN);
    }

    #[test]
    fn test_login_messages() {
        let err = AuthError::DomainNotAllowed {
            domain: "alghalbilaw.com".to_string(),
        };
        assert_eq!(
            login_error_message(&err),
            "الدخول متاح فقط لإيميلات @alghalbilaw.com"
        );
        assert_eq!(
            login_error_message(&AuthError::InvalidCredentials),
            MSG_INVALID_CREDENTIALS
        );
    }

    #[test]
    fn test_register_page_preserves_and_escapes_input() {
        let html = register_page(Some("x"), "a\"b@alghalbilaw.com", "<Sara>", "alghalbilaw.com");
        assert!(html.contains(r#"value="a&quot;b@alghalbilaw.com""#));
        assert!(html.contains("&lt;Sara&gt;"));
        assert!(html.contains(r#"class="error""#));
    }

    #[test]
    fn test_login_page_without_error() {
        let html = login_page(None, "", "alghalbilaw.com");
        assert!(!html.contains(r#"class="error""#));
        assert!(html.contains(r#"action="/login""#));
    }
}
