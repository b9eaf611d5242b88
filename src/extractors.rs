use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Redirect, Response};

use crate::db::models::Student;
use crate::error::AppError;
use crate::portal::domain::{PortalError, StudentId};
use crate::portal::service;
use crate::state::AppState;

/// Where the gate sends parents when a student is unavailable.
pub const PARENTS_HOME: &str = "/parents";

/// A student whose detail pages may be shown on this request.
///
/// Access is re-checked against the store on every request, so disabling the
/// portal flag takes effect on the very next page load.
#[derive(Debug, Clone)]
pub struct PortalStudent {
    pub id: StudentId,
    pub student: Student,
}

pub enum GateRejection {
    Redirect,
    Error(AppError),
}

impl IntoResponse for GateRejection {
    fn into_response(self) -> Response {
        match self {
            GateRejection::Redirect => Redirect::to(PARENTS_HOME).into_response(),
            GateRejection::Error(err) => err.into_response(),
        }
    }
}

impl FromRequestParts<AppState> for PortalStudent {
    type Rejection = GateRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| GateRejection::Redirect)?;
        let id = StudentId::parse(&raw_id).map_err(|_| GateRejection::Redirect)?;

        match service::authorize(state.students.as_ref(), &id).await {
            Ok(student) => Ok(PortalStudent { id, student }),
            Err(AppError::Portal(PortalError::NotEligible)) => {
                tracing::warn!("Access gate redirected request for student {}", id);
                Err(GateRejection::Redirect)
            }
            Err(err) => Err(GateRejection::Error(err)),
        }
    }
}
