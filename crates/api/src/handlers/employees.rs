use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use db::Employee;
use service::ServiceError;

use super::AppState;
use crate::{
    extract::{ApiJson, ApiPath},
    ApiError,
};

/// Body accepted by create and update.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl EmployeeDto {
    fn into_employee(self, id: Option<i64>) -> Result<Employee, ApiError> {
        for (field, value) in [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("email", &self.email),
        ] {
            if value.trim().is_empty() {
                return Err(ApiError::BadRequest(format!("{field} must not be blank")));
            }
        }

        Ok(Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
        })
    }
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = state.employees.get_all_employees().await?;
    Ok(Json(employees))
}

pub async fn get(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<Employee>, ApiError> {
    match state.employees.get_employee_by_id(id).await? {
        Some(employee) => Ok(Json(employee)),
        None => Err(ServiceError::NotFound { id }.into()),
    }
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<EmployeeDto>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let employee = payload.into_employee(None)?;
    let saved = state.employees.save_employee(employee).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn update(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<EmployeeDto>,
) -> Result<Json<Employee>, ApiError> {
    let employee = payload.into_employee(Some(id))?;

    if state.employees.get_employee_by_id(id).await?.is_none() {
        return Err(ServiceError::NotFound { id }.into());
    }

    let updated = state.employees.update_employee(employee).await?;
    Ok(Json(updated))
}

pub async fn delete(
    ApiPath(id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    state.employees.delete_employee(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
