//! Clients Router

use auth::require_auth;
use axum::{Router, middleware::from_fn, routing::get};

use crate::domain::repository::ClientRepository;
use crate::presentation::handlers::{self, ClientsAppState};

/// Client pages, all behind `require_auth`.
pub fn clients_router<C>(state: ClientsAppState<C>) -> Router
where
    C: ClientRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/clients", get(handlers::list::<C>))
        .route(
            "/clients/new",
            get(handlers::new_form).post(handlers::create::<C>),
        )
        .route_layer(from_fn(require_auth))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::extract::Request as AppRequest;
    use axum::http::{Request, StatusCode, header};
    use axum::middleware::{Next, from_fn as layer_fn};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use kernel::id::UserId;
    use tower::ServiceExt;
    use uuid::Uuid;

    use auth::{CurrentUser, SessionContext};

    use crate::infra::memory::MemoryClientRepository;
    use crate::presentation::views;

    /// Stands in for `load_session` with a fixed user.
    fn app_as(user: Option<CurrentUser>, repo: MemoryClientRepository) -> Router {
        clients_router(ClientsAppState::new(repo)).layer(layer_fn(
            move |mut req: AppRequest, next: Next| {
                let user = user.clone();
                async move {
                    req.extensions_mut().insert(SessionContext { user });
                    next.run(req).await
                }
            },
        ))
    }

    fn user() -> CurrentUser {
        CurrentUser {
            user_id: UserId::new(),
            email: "sara@alghalbilaw.com".to_string(),
            display_name: None,
            session_id: Uuid::new_v4(),
        }
    }

    fn post_new(body: &str) -> Request<Body> {
        Request::post("/clients/new")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(res: Response) -> String {
        let bytes = res.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_anonymous_redirected() {
        let app = app_as(None, MemoryClientRepository::new());
        let res = app
            .oneshot(Request::get("/clients").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()[header::LOCATION], "/login");
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let repo = MemoryClientRepository::new();
        let app = app_as(Some(user()), repo.clone());

        let res = app
            .clone()
            .oneshot(post_new("fullName=Acme+Trading&phone=0551"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()[header::LOCATION], "/clients");

        let res = app
            .oneshot(Request::get("/clients").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let html = body_text(res).await;
        assert!(html.contains("Acme Trading"));
        assert!(html.contains("0551"));
    }

    #[tokio::test]
    async fn test_empty_name_rerenders_form() {
        let repo = MemoryClientRepository::new();
        let app = app_as(Some(user()), repo.clone());

        let res = app
            .clone()
            .oneshot(post_new("fullName=+++&email=a%40b.com"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let html = body_text(res).await;
        assert!(html.contains(views::MSG_NAME_REQUIRED));
        assert!(html.contains("a@b.com"));

        let res = app
            .oneshot(Request::get("/clients").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(body_text(res).await.contains("لا يوجد موكلين بعد."));
    }

    #[tokio::test]
    async fn test_other_owner_sees_nothing() {
        let repo = MemoryClientRepository::new();
        app_as(Some(user()), repo.clone())
            .oneshot(post_new("fullName=Private+Client"))
            .await
            .unwrap();

        let res = app_as(Some(user()), repo)
            .oneshot(Request::get("/clients").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(!body_text(res).await.contains("Private Client"));
    }
}
