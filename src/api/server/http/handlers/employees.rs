use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json as JsonResponse,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value as JsonValue};

use crate::api::server::http::{error::HttpError, state::AppState};
use crate::model::{EmployeeChanges, EmployeeId, EmployeeRecord, NewEmployee};
use crate::storage::StorageClient;

#[derive(Debug, Serialize)]
pub struct EmployeesResponse {
    pub employees: Vec<EmployeeRecord>,
}

/// `GET /employees`，查询参数按原始顺序传入
pub async fn list<S: StorageClient + 'static>(
    State(state): State<AppState<S>>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<JsonResponse<EmployeesResponse>, HttpError> {
    let Query(params) = params?;
    let employees = state.server.get_employee_api().list(&params).await?;
    Ok(JsonResponse(EmployeesResponse { employees }))
}

/// `POST /employees`
pub async fn create<S: StorageClient + 'static>(
    State(state): State<AppState<S>>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<(StatusCode, JsonResponse<JsonValue>), HttpError> {
    let Json(body) = body?;
    let employee = NewEmployee::from_body(body)?;
    state.server.get_employee_api().create(&employee).await?;
    Ok((StatusCode::CREATED, JsonResponse(json!({ "status": "created" }))))
}

/// `PUT /employees/{firstName}_{lastName}`
pub async fn update<S: StorageClient + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<JsonResponse<JsonValue>, HttpError> {
    let id = EmployeeId::parse(&id)?;
    let Json(body) = body?;
    let changes = EmployeeChanges::from_body(body)?;
    state.server.get_employee_api().update(&id, &changes).await?;
    Ok(JsonResponse(json!({})))
}

/// `DELETE /employees/{id}`：未实现，始终返回 501
pub async fn delete<S: StorageClient + 'static>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    state.server.get_employee_api().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
