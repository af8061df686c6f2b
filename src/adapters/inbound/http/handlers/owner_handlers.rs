use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::adapters::inbound::http::{
    dto::{OwnerDto, OwnerResponse, OwnerSearchQuery},
    error::ApiError,
    middleware::AuthUser,
    router::AppState,
};

pub async fn create_owner(
    _user: AuthUser,
    State(state): State<AppState>,
    Json(dto): Json<OwnerDto>,
) -> Result<(StatusCode, Json<OwnerResponse>), ApiError> {
    let owner = state.owner_service.create(dto.into()).await?;
    Ok((StatusCode::CREATED, Json(OwnerResponse::from(&owner))))
}

pub async fn get_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<OwnerResponse>, ApiError> {
    let owner = state
        .owner_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("owner"))?;
    Ok(Json(OwnerResponse::from(&owner)))
}

pub async fn list_owners(
    State(state): State<AppState>,
    Query(query): Query<OwnerSearchQuery>,
) -> Result<Json<Vec<OwnerResponse>>, ApiError> {
    let page = query.page.filter(|p| *p > 0).unwrap_or(1);
    let page_size = query.page_size.filter(|s| *s > 0).unwrap_or(20);
    let owners = state
        .owner_service
        .search(query.name.as_deref(), (page - 1) * page_size, page_size)
        .await?;
    Ok(Json(owners.iter().map(OwnerResponse::from).collect()))
}

pub async fn update_owner(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<OwnerDto>,
) -> Result<StatusCode, ApiError> {
    if state.owner_service.update(id, dto.into()).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("owner"))
    }
}

pub async fn delete_owner(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.owner_service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("owner"))
    }
}
