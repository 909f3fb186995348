use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    error::{ApiError, StoreError},
    state::AppState,
    users::{
        dto::{DeleteStatus, NewUser, UpdateUser},
        extractors::{ApiJson, ApiPath},
        repo,
        repo_types::User,
    },
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/:id", get(get_user))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/api/users/add", post(add_user))
        .route("/api/users/update", put(update_user))
        .route("/api/users/delete/:id", delete(delete_user))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = repo::list_users(&state.db).await?;
    Ok(Json(users))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<User>, ApiError> {
    match repo::get_user(&state.db, id).await {
        Ok(user) => Ok(Json(user)),
        Err(StoreError::NotFound) => {
            warn!(user_id = id, "user not found");
            Err(StoreError::NotFound.into())
        }
        Err(e) => Err(e.into()),
    }
}

#[instrument(skip(state, payload))]
pub async fn add_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewUser>,
) -> Result<Json<User>, ApiError> {
    let user = repo::insert_user(&state.db, &payload).await?;
    info!(user_id = user.user_id, "user created");
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateUser>,
) -> Result<Json<User>, ApiError> {
    match repo::update_user(&state.db, &payload).await {
        Ok(user) => {
            info!(user_id = user.user_id, "user updated");
            Ok(Json(user))
        }
        Err(StoreError::NotFound) => {
            warn!(user_id = payload.user_id, "update of unknown user");
            Err(StoreError::NotFound.into())
        }
        Err(e) => Err(e.into()),
    }
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<DeleteStatus>, (StatusCode, Json<DeleteStatus>)> {
    match repo::delete_user(&state.db, id).await {
        Ok(()) => {
            info!(user_id = id, "user deleted");
            Ok(Json(DeleteStatus::deleted()))
        }
        Err(StoreError::NotFound) => {
            warn!(user_id = id, "delete of unknown user");
            Err((StatusCode::NOT_FOUND, Json(DeleteStatus::not_deleted())))
        }
        Err(e) => {
            error!(error = %e, user_id = id, "delete_user failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DeleteStatus::not_deleted()),
            ))
        }
    }
}
