use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde_json::json;

use crate::api::core::CoreError;

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    NotImplemented(String),
    ServiceUnavailable(String),
    InternalError(String),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            HttpError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            HttpError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            HttpError::BadRequest(_) => "validation_error",
            HttpError::NotFound(_) => "not_found",
            HttpError::NotImplemented(_) => "not_implemented",
            HttpError::ServiceUnavailable(_) | HttpError::InternalError(_) => "store_error",
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();
        let message = match self {
            HttpError::BadRequest(msg)
            | HttpError::NotFound(msg)
            | HttpError::NotImplemented(msg)
            | HttpError::ServiceUnavailable(msg)
            | HttpError::InternalError(msg) => msg,
        };

        let body = Json(json!({
            "error": message,
            "kind": kind,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => HttpError::BadRequest(msg),
            CoreError::NotFound(msg) => HttpError::NotFound(msg),
            CoreError::NotImplemented(msg) => HttpError::NotImplemented(msg),
            CoreError::Storage(e) if e.is_unavailable() => HttpError::ServiceUnavailable(e.to_string()),
            CoreError::Storage(e) => HttpError::InternalError(e.to_string()),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        HttpError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        HttpError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageError;

    #[test]
    fn test_core_error_mapping() {
        let cases = [
            (CoreError::Validation("bad user id".into()), StatusCode::BAD_REQUEST),
            (CoreError::NotFound("missing".into()), StatusCode::NOT_FOUND),
            (CoreError::NotImplemented("later".into()), StatusCode::NOT_IMPLEMENTED),
            (
                CoreError::Storage(StorageError::ConnectionError("refused".into())),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                CoreError::Storage(StorageError::QueryError("syntax".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (core, status) in cases {
            let kind = core.kind();
            let http = HttpError::from(core);
            assert_eq!(http.status(), status);
            assert_eq!(http.kind(), kind);
        }
    }

    #[tokio::test]
    async fn test_query_rejection_gets_json_body() {
        use axum::body::to_bytes;
        use axum::extract::Query;
        use std::collections::HashMap;

        let uri: http::Uri = "/departments?employeeCount=abc".parse().expect("uri");
        let rejection = Query::<HashMap<String, u32>>::try_from_uri(&uri).expect_err("not a number");

        let response = HttpError::from(rejection).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("JSON body");
        assert_eq!(body["kind"], "validation_error");
        assert_eq!(body["status"], 400);
        assert!(body["error"].as_str().is_some_and(|msg| !msg.is_empty()));
    }
}
