use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::adapters::inbound::http::{
    dto::{
        CreatePropertyDto, PagedResponse, PriceUpdateDto, PropertyResponse, PropertySearchQuery,
        UpdatePropertyDto,
    },
    error::ApiError,
    middleware::AuthUser,
    router::AppState,
};

/// Anonymous search over the catalog. All other property operations
/// require a bearer token.
pub async fn search_properties(
    State(state): State<AppState>,
    Query(query): Query<PropertySearchQuery>,
) -> Result<Json<PagedResponse<PropertyResponse>>, ApiError> {
    let page = state.property_service.search_paged(query.into()).await?;
    Ok(Json(page.into()))
}

pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PropertyResponse>, ApiError> {
    let property = state
        .property_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("property"))?;
    Ok(Json(PropertyResponse::from(&property)))
}

pub async fn create_property(
    _user: AuthUser,
    State(state): State<AppState>,
    Json(dto): Json<CreatePropertyDto>,
) -> Result<(StatusCode, Json<PropertyResponse>), ApiError> {
    let property = state.property_service.create(dto.into()).await?;
    Ok((StatusCode::CREATED, Json(PropertyResponse::from(&property))))
}

pub async fn update_property(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdatePropertyDto>,
) -> Result<StatusCode, ApiError> {
    if state.property_service.update(id, dto.into()).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("property"))
    }
}

pub async fn update_property_price(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<PriceUpdateDto>,
) -> Result<StatusCode, ApiError> {
    if state.property_service.update_price(id, dto.into()).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("property"))
    }
}

pub async fn delete_property(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.property_service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("property"))
    }
}
