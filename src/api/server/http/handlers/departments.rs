use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::Json as JsonResponse,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value as JsonValue};

use crate::api::server::http::{error::HttpError, state::AppState};
use crate::model::{DepartmentRecord, NewDepartment};
use crate::storage::StorageClient;

#[derive(Debug, Serialize)]
pub struct DepartmentsResponse {
    pub departments: Vec<DepartmentRecord>,
}

/// `GET /departments`
pub async fn list<S: StorageClient + 'static>(
    State(state): State<AppState<S>>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<JsonResponse<DepartmentsResponse>, HttpError> {
    let Query(params) = params?;
    let departments = state.server.get_department_api().list(&params).await?;
    Ok(JsonResponse(DepartmentsResponse { departments }))
}

/// `POST /departments`，按名称合并
pub async fn create<S: StorageClient + 'static>(
    State(state): State<AppState<S>>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<(StatusCode, JsonResponse<JsonValue>), HttpError> {
    let Json(body) = body?;
    let department = NewDepartment::from_body(body)?;
    state.server.get_department_api().create(&department).await?;
    Ok((StatusCode::CREATED, JsonResponse(json!({ "status": "created" }))))
}
