use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};

use crate::{
    AppState,
    entities::film,
    error::{AppError, AppResult},
    models::{CreateFilmRequest, ListFilmsQuery, MessageResponse},
    tenant::TenantEmail,
    validation,
};

/// Hard cap on rows per tenant, checked before every insert.
pub const MAX_FILMS_PER_TENANT: u64 = 200;

pub async fn list_films(
    State(state): State<Arc<AppState>>,
    Extension(TenantEmail(email)): Extension<TenantEmail>,
    Query(query): Query<ListFilmsQuery>,
) -> AppResult<Json<Vec<film::Model>>> {
    let films = state.store.list(&email, &query).await?;
    Ok(Json(films))
}

pub async fn create_film(
    State(state): State<Arc<AppState>>,
    Extension(TenantEmail(email)): Extension<TenantEmail>,
    Json(body): Json<CreateFilmRequest>,
) -> AppResult<Json<film::Model>> {
    let new_film = validation::validate_new_film(&body).map_err(AppError::Validation)?;

    // Count-then-insert, no transaction: concurrent creates for one tenant
    // can land past the cap.
    let count = state.store.count(&email).await?;
    if count >= MAX_FILMS_PER_TENANT {
        return Err(AppError::FilmLimitExceeded);
    }

    let created = state.store.insert(&email, new_film).await?;
    Ok(Json(created))
}

pub async fn delete_film(
    State(state): State<Arc<AppState>>,
    Extension(TenantEmail(email)): Extension<TenantEmail>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.store.delete_by_id(&email, id).await?;
    Ok(Json(MessageResponse { message: "film deleted" }))
}

pub async fn delete_all_films(
    State(state): State<Arc<AppState>>,
    Extension(TenantEmail(email)): Extension<TenantEmail>,
) -> AppResult<Json<MessageResponse>> {
    state.store.delete_all(&email).await?;
    Ok(Json(MessageResponse { message: "all films deleted" }))
}
