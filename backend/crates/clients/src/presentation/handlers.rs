//! HTTP Handlers

use std::sync::Arc;

use auth::CurrentUser;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Extension, Form};

use crate::application::{CreateClientInput, CreateClientUseCase, ListClientsUseCase};
use crate::domain::repository::ClientRepository;
use crate::error::ClientResult;
use crate::presentation::dto::NewClientForm;
use crate::presentation::views;

/// Shared state for client handlers
#[derive(Clone)]
pub struct ClientsAppState<C>
where
    C: ClientRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<C>,
}

impl<C> ClientsAppState<C>
where
    C: ClientRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: C) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}

/// GET /clients
pub async fn list<C>(
    State(state): State<ClientsAppState<C>>,
    Extension(user): Extension<CurrentUser>,
) -> ClientResult<Html<String>>
where
    C: ClientRepository + Clone + Send + Sync + 'static,
{
    let clients = ListClientsUseCase::new(state.repo.clone())
        .execute(user.user_id)
        .await?;

    Ok(Html(views::list_page(&user, &clients)))
}

/// GET /clients/new
pub async fn new_form(Extension(user): Extension<CurrentUser>) -> Html<String> {
    Html(views::new_page(&user, None, &NewClientForm::default()))
}

/// POST /clients/new
pub async fn create<C>(
    State(state): State<ClientsAppState<C>>,
    Extension(user): Extension<CurrentUser>,
    Form(form): Form<NewClientForm>,
) -> Response
where
    C: ClientRepository + Clone + Send + Sync + 'static,
{
    let input = CreateClientInput {
        full_name: form.full_name.clone(),
        email: Some(form.email.clone()),
        phone: Some(form.phone.clone()),
        notes: Some(form.notes.clone()),
    };

    match CreateClientUseCase::new(state.repo.clone())
        .execute(user.user_id, input)
        .await
    {
        Ok(_) => Redirect::to("/clients").into_response(),
        Err(e) if e.is_form_error() => {
            e.log();
            let html = views::new_page(&user, Some(views::error_message(&e)), &form);
            (StatusCode::BAD_REQUEST, Html(html)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
