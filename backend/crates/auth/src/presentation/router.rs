//! Auth Router

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post},
};

use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_auth;

/// Auth pages and the dashboard.
///
/// Expects `load_session` to be layered outside; without it every protected
/// route redirects to `/login`.
pub fn auth_router<R>(state: AuthAppState<R>) -> Router
where
    R: UserRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/logout", post(handlers::logout::<R>))
        .route("/dashboard", get(handlers::dashboard))
        .route_layer(from_fn(require_auth))
        .route("/", get(handlers::index))
        .route(
            "/register",
            get(handlers::register_page::<R>).post(handlers::register::<R>),
        )
        .route(
            "/login",
            get(handlers::login_page::<R>).post(handlers::login::<R>),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::middleware::from_fn_with_state;
    use http_body_util::BodyExt;
    use platform::password::WorkFactor;
    use tower::ServiceExt;

    use crate::application::config::AuthConfig;
    use crate::infra::memory::MemoryAuthRepository;
    use crate::presentation::middleware::load_session;
    use crate::presentation::views;

    fn app() -> (Router, MemoryAuthRepository) {
        let repo = MemoryAuthRepository::new();
        let config = AuthConfig {
            password_work_factor: WorkFactor::testing(),
            ..AuthConfig::development()
        };
        let state = AuthAppState::new(repo.clone(), config);
        let router = auth_router(state.clone()).layer(from_fn_with_state(state, load_session));
        (router, repo)
    }

    fn form(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(res: axum::response::Response) -> String {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn session_cookie(res: &axum::response::Response) -> String {
        let raw = res.headers()[header::SET_COOKIE].to_str().unwrap();
        raw.split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_index_redirects_anonymous_to_login() {
        let (app, _) = app();
        let res = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn test_dashboard_requires_session() {
        let (app, _) = app();
        let res = app
            .oneshot(Request::get("/dashboard").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn test_register_then_dashboard() {
        let (app, _) = app();
        let res = app
            .clone()
            .oneshot(form(
                "/register",
                "email=sara%40alghalbilaw.com&name=Sara&password=Str0ngPassw0rd",
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()[header::LOCATION], "/dashboard");
        let cookie = session_cookie(&res);
        assert!(cookie.starts_with("law_session="));

        let res = app
            .oneshot(
                Request::get("/dashboard")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert!(body_text(res).await.contains("Sara"));
    }

    #[tokio::test]
    async fn test_register_outside_domain_rerenders_form() {
        let (app, repo) = app();
        let res = app
            .oneshot(form(
                "/register",
                "email=x%40gmail.com&name=X&password=Str0ngPassw0rd",
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(res.headers().get(header::SET_COOKIE).is_none());
        let html = body_text(res).await;
        assert!(html.contains("التسجيل متاح فقط لإيميلات @alghalbilaw.com"));
        assert!(html.contains("x@gmail.com"));
        assert_eq!(repo.session_count(), 0);
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_generic() {
        let (app, _) = app();
        app.clone()
            .oneshot(form(
                "/register",
                "email=sara%40alghalbilaw.com&password=Str0ngPassw0rd",
            ))
            .await
            .unwrap();

        for body in [
            "email=sara%40alghalbilaw.com&password=wrongpassword",
            "email=nobody%40alghalbilaw.com&password=Str0ngPassw0rd",
        ] {
            let res = app.clone().oneshot(form("/login", body)).await.unwrap();
            assert_eq!(res.status(), StatusCode::BAD_REQUEST);
            assert!(res.headers().get(header::SET_COOKIE).is_none(), "{body}");
            assert!(body_text(res).await.contains(views::MSG_INVALID_CREDENTIALS));
        }
    }

    #[tokio::test]
    async fn test_logout_clears_cookie_and_session() {
        let (app, repo) = app();
        let res = app
            .clone()
            .oneshot(form(
                "/register",
                "email=sara%40alghalbilaw.com&password=Str0ngPassw0rd",
            ))
            .await
            .unwrap();
        let cookie = session_cookie(&res);

        let res = app
            .clone()
            .oneshot(
                Request::post("/logout")
                    .header(header::COOKIE, cookie.clone())
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()[header::LOCATION], "/login");
        let cleared = res.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cleared.contains("Max-Age=0"));
        assert_eq!(repo.session_count(), 0);

        let res = app
            .oneshot(
                Request::get("/dashboard")
                    .header(header::COOKIE, cookie)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.headers()[header::LOCATION], "/login");
    }
}
