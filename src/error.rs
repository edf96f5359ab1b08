use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
    #[error("template registration failed: {0}")]
    Template(#[from] handlebars::TemplateError),
}

const ERROR_PAGE: &str = "<!DOCTYPE html>
<html>
<head><title>Error</title></head>
<body>
    <h1>Internal Server Error</h1>
    <p>The request could not be completed.</p>
</body>
</html>
";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(ERROR_PAGE)).into_response()
    }
}
