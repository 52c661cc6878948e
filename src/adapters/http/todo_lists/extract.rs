//! Body extractor for endpoints that submit a title.

use axum::{
    async_trait,
    extract::{rejection::FormRejection, rejection::JsonRejection, FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};

use crate::adapters::http::error::ErrorResponse;

use super::dto::TitleRequest;

/// A submitted title, read from either a JSON or a urlencoded form body.
#[derive(Debug, Clone)]
pub struct TitleBody(pub TitleRequest);

#[async_trait]
impl<S> FromRequest<S> for TitleBody
where
    S: Send + Sync,
{
    type Rejection = TitleBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(req.headers()) {
            let Form(body) = Form::<TitleRequest>::from_request(req, state).await?;
            Ok(TitleBody(body))
        } else {
            let Json(body) = Json::<TitleRequest>::from_request(req, state).await?;
            Ok(TitleBody(body))
        }
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

/// Rejection for [`TitleBody`]: keeps axum's status, answers with JSON.
#[derive(Debug)]
pub struct TitleBodyRejection {
    status: StatusCode,
    detail: String,
}

impl From<JsonRejection> for TitleBodyRejection {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<FormRejection> for TitleBodyRejection {
    fn from(rejection: FormRejection) -> Self {
        Self {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for TitleBodyRejection {
    fn into_response(self) -> Response {
        tracing::debug!(status = %self.status, detail = %self.detail, "Unreadable request body");
        ErrorResponse::invalid_request(self.detail).with_status(self.status)
    }
}
