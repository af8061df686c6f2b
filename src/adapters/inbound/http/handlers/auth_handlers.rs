use axum::{extract::State, http::StatusCode, Json};

use crate::adapters::inbound::http::{
    dto::{AuthResponse, LoginDto, RegisterDto},
    error::ApiError,
    router::AppState,
};

pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterDto>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let token = state.auth_service.register(dto.into()).await?;
    Ok((StatusCode::CREATED, Json(token.into())))
}

pub async fn login(
    State(state): State<AppState>,
    Json(dto): Json<LoginDto>,
) -> Result<Json<AuthResponse>, ApiError> {
    let token = state.auth_service.login(dto.into()).await?;
    Ok(Json(token.into()))
}
