use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    adapters::inbound::http::{
        dto::ImageResponse, error::ApiError, middleware::AuthUser, router::AppState,
    },
    domain::models::CreateImage,
};

pub async fn list_images(
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
) -> Result<Json<Vec<ImageResponse>>, ApiError> {
    let images = state.image_service.get_by_property_id(property_id).await?;
    Ok(Json(images.iter().map(ImageResponse::from).collect()))
}

/// Multipart upload. Expects a `file` part plus optional `description` and
/// `enabled` text parts. The file lands in the [`FileStore`] and the image
/// record points at its public URL.
///
/// [`FileStore`]: crate::ports::storage::FileStore
pub async fn upload_image(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ImageResponse>), ApiError> {
    let mut file: Option<(String, Option<String>, bytes::Bytes)> = None;
    let mut description = String::new();
    let mut enabled = true;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        match field.name().unwrap_or_default() {
            "file" => {
                let file_name = field.file_name().unwrap_or("upload.bin").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("failed to read file part: {e}")))?;
                file = Some((file_name, content_type, data));
            }
            "description" => {
                description = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("bad description part: {e}")))?;
            }
            "enabled" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("bad enabled part: {e}")))?;
                enabled = text
                    .parse()
                    .map_err(|_| ApiError::BadRequest("enabled must be true or false".into()))?;
            }
            _ => {}
        }
    }

    let (file_name, content_type, data) =
        file.ok_or_else(|| ApiError::BadRequest("missing file part".into()))?;

    let stored = state
        .files
        .save(&file_name, content_type.as_deref(), data)
        .await?;

    let image = state
        .image_service
        .create(CreateImage {
            property_id,
            url: state.files.public_url(&stored.key),
            description,
            enabled,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ImageResponse::from(&image))))
}

#[derive(Debug, Deserialize)]
pub struct SetEnabledDto {
    pub enabled: bool,
}

pub async fn set_image_enabled(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<SetEnabledDto>,
) -> Result<StatusCode, ApiError> {
    if state.image_service.set_enabled(id, dto.enabled).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("image"))
    }
}

pub async fn delete_image(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.image_service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("image"))
    }
}
