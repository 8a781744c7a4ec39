//! HTTP route handlers for the console page and its read-only API.

use axum::Router;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::response::{Html, Json};
use axum::routing::{get, post};
use blocklist::core::outcome::Action;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConsoleResult;
use crate::state::AppState;
use crate::view::PageView;

/// Build the console router: the HTML page plus `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/block", post(block))
        .route("/unblock", post(unblock))
        .nest("/api", api_router())
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/block-list", get(get_block_list))
}

/// Body of the block and unblock forms.
#[derive(Debug, Default, Deserialize)]
pub struct UrlForm {
    #[serde(default)]
    pub url: String,
}

/// GET / - page with the current list and no message.
async fn index(State(state): State<AppState>) -> ConsoleResult<Html<String>> {
    render_page(&state, String::new())
}

/// POST /block
async fn block(
    State(state): State<AppState>,
    form: Result<Form<UrlForm>, FormRejection>,
) -> ConsoleResult<Html<String>> {
    apply(&state, Action::Block, form)
}

/// POST /unblock
async fn unblock(
    State(state): State<AppState>,
    form: Result<Form<UrlForm>, FormRejection>,
) -> ConsoleResult<Html<String>> {
    apply(&state, Action::Unblock, form)
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Serialize)]
struct BlockListResponse {
    urls: Vec<String>,
}

/// GET /api/block-list - current entries, in order.
async fn get_block_list(State(state): State<AppState>) -> ConsoleResult<Json<BlockListResponse>> {
    let urls = state.store.snapshot()?;
    Ok(Json(BlockListResponse { urls }))
}

fn apply(
    state: &AppState,
    action: Action,
    form: Result<Form<UrlForm>, FormRejection>,
) -> ConsoleResult<Html<String>> {
    // An unreadable body counts as an empty submission.
    let raw_url = match form {
        Ok(Form(form)) => form.url,
        Err(rejection) => {
            debug!(%action, %rejection, "unreadable form body");
            String::new()
        }
    };
    let outcome = state.store.apply(action, &raw_url)?;
    render_page(state, outcome.message())
}

fn render_page(state: &AppState, message: String) -> ConsoleResult<Html<String>> {
    let view = PageView {
        message,
        block_list: state.store.snapshot()?,
    };
    Ok(Html(state.renderer.render(&view)?))
}
