//! Handlers for the `/api/Projects` resource.
//!
//! Every mutation runs the shared validation rules before touching the
//! store; the store only ever sees trimmed, normalised values.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use knitnote_core::error::CoreError;
use knitnote_core::project::{CreateProject, Project, UpdateProject};
use knitnote_core::types::DbId;
use knitnote_core::validation::{validate_date_order, validate_patch, validate_project};
use knitnote_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::json::ApiJson;
use crate::middleware::path::ApiPath;
use crate::response::MessageResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// POST /api/Projects
///
/// Validates the submitted fields, derives `completed`/`progress` from the
/// dates and returns the stored row with 201 Created.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let new_project = validate_project(&input.as_draft()).map_err(AppError::validation)?;

    let project = ProjectRepo::create(&state.pool, &new_project).await?;
    tracing::info!(id = project.id, title = %project.title, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/Projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/Projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(project))
}

/// PATCH /api/Projects/{id}
///
/// Applies only the supplied fields. Status flags are written as given and
/// are not re-derived from the dates. When one date changes, the ordering
/// check runs against the other date as currently stored.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    let changes = validate_patch(&input.as_draft()).map_err(AppError::validation)?;
    if changes.is_empty() {
        return Err(AppError::BadRequest("No fields to update".into()));
    }

    let existing = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if changes.start_date.is_some() || changes.end_date.is_some() {
        let start = changes.start_date.unwrap_or(existing.start_date);
        let end = changes.end_date.unwrap_or(existing.end_date);
        validate_date_order(start, end).map_err(AppError::validation)?;
    }

    let project = ProjectRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/Projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if ProjectRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Project deleted");
        Ok(Json(MessageResponse {
            message: "Project deleted",
        }))
    } else {
        Err(not_found(id))
    }
}
