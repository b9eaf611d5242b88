use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::db::models::ChildSummary;
use crate::error::{AppError, AppResult};
use crate::portal::domain::VerifiedStudent;
use crate::portal::service;
use crate::state::AppState;

#[derive(Serialize)]
pub struct VerifyChildResponse {
    pub success: bool,
    pub message: String,
    pub data: VerifiedStudent,
}

/// Malformed JSON is a validation error like any other.
pub(crate) fn json_body(body: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::warn!("Rejected request body: {}", rejection);
        AppError::BadRequest("Invalid JSON body".into())
    })
}

/// POST /parents/api/verify-child
async fn verify_child(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<VerifyChildResponse>> {
    let body = json_body(body)?;
    let verified = service::verify_child(state.students.as_ref(), body.get("studentId")).await?;

    Ok(Json(VerifyChildResponse {
        success: true,
        message: "Student verified successfully".to_string(),
        data: verified,
    }))
}

/// POST /parents/api/children
async fn children(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Vec<ChildSummary>>> {
    let body = json_body(body)?;
    let summaries = service::children_summary(
        state.students.as_ref(),
        body.get("ids"),
        &state.config.portal.default_grade,
    )
    .await?;

    Ok(Json(summaries))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/parents/api/verify-child", post(verify_child))
        .route("/parents/api/children", post(children))
}
