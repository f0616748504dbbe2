//! Fruit HTTP Routes
//!
//! The eight page handlers. Each makes at most one store call, then either
//! renders a page or redirects to the fruit list.

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{Html, Redirect},
    routing::get,
    Form, Router,
};

use super::errors::{AppError, AppResult};
use crate::fruits::FruitForm;
use crate::observability::Logger;
use crate::store::FruitStore;
use crate::views::{self, Page};

/// Where every write sends the client afterwards
pub const FRUITS_PATH: &str = "/fruits";

// ==================
// Shared State
// ==================

/// State shared across handlers
///
/// The store handle is opened once at startup and cloned into each request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FruitStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn FruitStore>) -> Self {
        Self { store }
    }
}

// ==================
// Fruit Routes
// ==================

/// Create fruit routes
pub fn fruit_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler).fallback(method_not_allowed_handler))
        .route(
            "/fruits",
            get(index_handler)
                .post(create_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/fruits/new",
            get(new_form_handler).fallback(method_not_allowed_handler),
        )
        .route(
            "/fruits/:id",
            get(show_handler)
                .put(update_handler)
                .delete(delete_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/fruits/:id/edit",
            get(edit_form_handler).fallback(method_not_allowed_handler),
        )
}

// ==================
// Page Handlers
// ==================

async fn home_handler() -> Html<String> {
    views::render(&Page::Home)
}

async fn index_handler(State(state): State<AppState>) -> AppResult<Html<String>> {
    let fruits = state.store.find_all().await?;
    Ok(views::render(&Page::Index { fruits: &fruits }))
}

async fn new_form_handler() -> Html<String> {
    views::render(&Page::New)
}

async fn show_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let fruit = state.store.find_by_id(&id).await?.ok_or(AppError::NotFound)?;
    Ok(views::render(&Page::Show { fruit: &fruit }))
}

async fn edit_form_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let fruit = state.store.find_by_id(&id).await?.ok_or(AppError::NotFound)?;
    Ok(views::render(&Page::Edit { fruit: &fruit }))
}

// ==================
// Write Handlers
// ==================

async fn create_handler(
    State(state): State<AppState>,
    form: Result<Form<FruitForm>, FormRejection>,
) -> AppResult<Redirect> {
    let Form(form) = form?;
    let id = state.store.insert(form.into_record()).await?;
    Logger::info("FRUIT_CREATED", &[("id", id.to_string().as_str())]);
    Ok(Redirect::to(FRUITS_PATH))
}

async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<Form<FruitForm>, FormRejection>,
) -> AppResult<Redirect> {
    let Form(form) = form?;
    state.store.update_by_id(&id, form.into_record()).await?;
    Logger::info("FRUIT_UPDATED", &[("id", id.as_str())]);
    Ok(Redirect::to(FRUITS_PATH))
}

async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    state.store.delete_by_id(&id).await?;
    Logger::info("FRUIT_DELETED", &[("id", id.as_str())]);
    Ok(Redirect::to(FRUITS_PATH))
}

/// Any path no route matches
pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}

/// Known path, method it does not serve
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
