use askama::Template;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};

use crate::config::PortalConfig;
use crate::error::AppError;
use crate::extractors::PARENTS_HOME;

/// Wrapper to render askama templates as axum responses
pub struct Html<T: Template>(pub T);

impl<T: Template> IntoResponse for Html<T> {
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                body,
            )
                .into_response(),
            Err(e) => AppError::Internal(format!("Template render error: {}", e)).into_response(),
        }
    }
}

/// Values every full page needs for its header and client script.
#[derive(Debug, Clone)]
pub struct Chrome {
    pub school_name: String,
    pub link_storage_key: String,
}

impl From<&PortalConfig> for Chrome {
    fn from(config: &PortalConfig) -> Self {
        Self {
            school_name: config.school_name.clone(),
            link_storage_key: config.link_storage_key.clone(),
        }
    }
}

pub async fn index() -> Redirect {
    Redirect::to(PARENTS_HOME)
}
