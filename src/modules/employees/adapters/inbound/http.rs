use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::employees::application::errors::ApplicationError;
use crate::modules::employees::core::employee::Employee;
use crate::shell::state::AppState;

pub const DELETED_MESSAGE: &str = "Employee deleted successfully!";

/// Request body for create and update. A client supplied `id` is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeBody {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<EmployeeBody> for Employee {
    fn from(body: EmployeeBody) -> Self {
        Employee::new(body.first_name, body.last_name, body.email)
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApplicationError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApplicationError::ResourceExists { .. } => StatusCode::CONFLICT,
            ApplicationError::Repository(error) => {
                tracing::error!(%error, "Employee repository failure");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };
        (
            status,
            Json(ErrorResponse {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub async fn create_employee(
    State(state): State<AppState>,
    body: Result<Json<EmployeeBody>, JsonRejection>,
) -> Result<Response, ApplicationError> {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return Ok(StatusCode::UNPROCESSABLE_ENTITY.into_response()),
    };

    let saved = state.employees.save_employee(body.into()).await?;
    Ok((StatusCode::CREATED, Json(saved)).into_response())
}

pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApplicationError> {
    Ok(Json(state.employees.get_all_employees().await?))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, ApplicationError> {
    Ok(Json(state.employees.require_employee(id).await?))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<EmployeeBody>, JsonRejection>,
) -> Result<Response, ApplicationError> {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return Ok(StatusCode::UNPROCESSABLE_ENTITY.into_response()),
    };

    let existing = state.employees.require_employee(id).await?;
    let changed = Employee {
        id: existing.id,
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
    };

    let updated = state.employees.update_employee(changed).await?;
    Ok(Json(updated).into_response())
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApplicationError> {
    state.employees.require_employee(id).await?;
    state.employees.delete_employee(id).await?;
    Ok((StatusCode::OK, DELETED_MESSAGE))
}
