//! Media attachment handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::media::dtos::{AttachMediaDto, DeleteMediaDto, MediaFileResponseDto};
use crate::features::media::services::MediaService;
use crate::shared::types::ApiResponse;

/// Attach a media file to a complaint
#[utoipa::path(
    post,
    path = "/api/complaints/{id}/media",
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    request_body = AttachMediaDto,
    responses(
        (status = 201, description = "Media attached", body = ApiResponse<MediaFileResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Complaint not found")
    ),
    tag = "media"
)]
pub async fn attach_media(
    State(service): State<Arc<MediaService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<AttachMediaDto>,
) -> Result<(StatusCode, Json<ApiResponse<MediaFileResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let media = service.attach(id, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(media.into()),
            Some("Media attached successfully".to_string()),
            None,
        )),
    ))
}

/// List media files of a complaint
#[utoipa::path(
    get,
    path = "/api/complaints/{id}/media",
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Media files in insertion order", body = ApiResponse<Vec<MediaFileResponseDto>>)
    ),
    tag = "media"
)]
pub async fn list_media(
    State(service): State<Arc<MediaService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<MediaFileResponseDto>>>> {
    let media = service.list_for(id).await?;
    let dtos: Vec<MediaFileResponseDto> = media.into_iter().map(|m| m.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Delete selected media files of a complaint
#[utoipa::path(
    delete,
    path = "/api/complaints/{id}/media",
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    request_body = DeleteMediaDto,
    responses(
        (status = 200, description = "Media deleted"),
        (status = 400, description = "Empty id list or nothing matched"),
        (status = 404, description = "Complaint not found")
    ),
    tag = "media"
)]
pub async fn delete_media_bulk(
    State(service): State<Arc<MediaService>>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<DeleteMediaDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let deleted = service.delete_for(id, &dto.media_ids).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some(format!("{} media file(s) deleted successfully", deleted)),
        None,
    )))
}

/// Delete a single media file
#[utoipa::path(
    delete,
    path = "/api/media/{id}",
    params(
        ("id" = i32, Path, description = "Media file ID")
    ),
    responses(
        (status = 200, description = "Media file deleted"),
        (status = 404, description = "Media file not found")
    ),
    tag = "media"
)]
pub async fn detach_media(
    State(service): State<Arc<MediaService>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    service.detach(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Media file deleted successfully".to_string()),
        None,
    )))
}
