//! Student endpoints (read-only)

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::student::{Student, StudentQuery},
};

use super::{AuthenticatedUser, PaginatedResponse};

/// List students with search and pagination
#[utoipa::path(
    get,
    path = "/student",
    tag = "students",
    security(("bearer_auth" = [])),
    params(StudentQuery),
    responses(
        (status = 200, description = "List of students", body = PaginatedResponse<Student>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_students(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<StudentQuery>,
) -> AppResult<Json<PaginatedResponse<Student>>> {
    claims.require_staff()?;

    let (students, total) = state.services.students.search(&query).await?;

    Ok(Json(PaginatedResponse {
        items: students,
        total,
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(20),
    }))
}

/// Get student details by ID
#[utoipa::path(
    get,
    path = "/student/{id}",
    tag = "students",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Student>> {
    claims.require_staff()?;
    let student = state.services.students.get_by_id(id).await?;
    Ok(Json(student))
}
