use askama::Template;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::db::models::ChildSummary;
use crate::error::AppResult;
use crate::portal::service;
use crate::routes::api::json_body;
use crate::routes::home::{Chrome, Html};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "pages/children.html")]
struct ChildrenPageTemplate {
    chrome: Chrome,
}

#[derive(Template)]
#[template(path = "pages/add_child.html")]
struct AddChildTemplate {
    chrome: Chrome,
    redirect_after_link_ms: u64,
}

#[derive(Template)]
#[template(path = "components/children_grid.html")]
pub struct ChildrenGridTemplate {
    pub children: Vec<ChildSummary>,
}

/// GET /parents
///
/// The linked ids live in the browser, so this is only the shell; the client
/// script fills it in from the grid endpoint.
async fn children_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(ChildrenPageTemplate {
        chrome: Chrome::from(&state.config.portal),
    })
}

/// GET /parents/add-child
async fn add_child_page(State(state): State<AppState>) -> impl IntoResponse {
    Html(AddChildTemplate {
        chrome: Chrome::from(&state.config.portal),
        redirect_after_link_ms: state.config.portal.redirect_after_link_ms,
    })
}

/// POST /parents/children/grid
/// Same input as the children API, rendered as the card grid fragment.
async fn children_grid(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let body = json_body(body)?;
    let children = service::children_summary(
        state.students.as_ref(),
        body.get("ids"),
        &state.config.portal.default_grade,
    )
    .await?;

    Ok(Html(ChildrenGridTemplate { children }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/parents", get(children_page))
        .route("/parents/add-child", get(add_child_page))
        .route("/parents/children/grid", post(children_grid))
}
