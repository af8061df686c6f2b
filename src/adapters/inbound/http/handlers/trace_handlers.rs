use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::adapters::inbound::http::{
    dto::{CreateTraceDto, TraceResponse},
    error::ApiError,
    middleware::AuthUser,
    router::AppState,
};

pub async fn list_traces(
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
) -> Result<Json<Vec<TraceResponse>>, ApiError> {
    let traces = state.trace_service.get_by_property_id(property_id).await?;
    Ok(Json(traces.iter().map(TraceResponse::from).collect()))
}

pub async fn create_trace(
    _user: AuthUser,
    State(state): State<AppState>,
    Json(dto): Json<CreateTraceDto>,
) -> Result<(StatusCode, Json<TraceResponse>), ApiError> {
    let trace = state.trace_service.create(dto.into()).await?;
    Ok((StatusCode::CREATED, Json(TraceResponse::from(&trace))))
}
