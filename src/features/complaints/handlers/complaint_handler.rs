use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::complaints::dtos::{
    ComplaintDetailResponseDto, ComplaintResponseDto, CreateComplaintDto, ListComplaintsQuery,
    UpdateComplaintDto, UpdateComplaintStatusDto, ValidatePnrDto,
};
use crate::features::complaints::services::ComplaintService;
use crate::features::media::dtos::MediaFileResponseDto;
use crate::features::media::services::MediaService;
use crate::shared::types::{ApiResponse, PaginationQuery};

/// State for complaint handlers
#[derive(Clone)]
pub struct ComplaintState {
    pub complaint_service: Arc<ComplaintService>,
    pub media_service: Arc<MediaService>,
}

/// Lodge a new complaint
#[utoipa::path(
    post,
    path = "/api/complaints",
    request_body = CreateComplaintDto,
    responses(
        (status = 201, description = "Complaint created", body = ApiResponse<ComplaintDetailResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "complaints"
)]
pub async fn create_complaint(
    State(state): State<ComplaintState>,
    AppJson(dto): AppJson<CreateComplaintDto>,
) -> Result<(StatusCode, Json<ApiResponse<ComplaintDetailResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let complaint = state.complaint_service.create(dto).await?;
    let media = state.media_service.list_for(complaint.complain_id).await?;

    let detail = ComplaintDetailResponseDto {
        complaint: complaint.into(),
        media_files: media.into_iter().map(MediaFileResponseDto::from).collect(),
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(detail),
            Some("Complaint created successfully".to_string()),
            None,
        )),
    ))
}

/// List complaints, newest first
#[utoipa::path(
    get,
    path = "/api/complaints",
    params(ListComplaintsQuery, PaginationQuery),
    responses(
        (status = 200, description = "Page of complaints", body = ApiResponse<Vec<ComplaintResponseDto>>),
        (status = 400, description = "Unknown status filter")
    ),
    tag = "complaints"
)]
pub async fn list_complaints(
    State(state): State<ComplaintState>,
    Query(filter): Query<ListComplaintsQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<ComplaintResponseDto>>>> {
    let (complaints, total) = state.complaint_service.list(&filter, &pagination).await?;
    let dtos: Vec<ComplaintResponseDto> = complaints.into_iter().map(|c| c.into()).collect();
    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(pagination.meta(total)),
    )))
}

/// Get a complaint with its media files
#[utoipa::path(
    get,
    path = "/api/complaints/{id}",
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Complaint found", body = ApiResponse<ComplaintDetailResponseDto>),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints"
)]
pub async fn get_complaint(
    State(state): State<ComplaintState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ComplaintDetailResponseDto>>> {
    let complaint = state.complaint_service.get_by_id(id).await?;
    let media = state.media_service.list_for(id).await?;

    let detail = ComplaintDetailResponseDto {
        complaint: complaint.into(),
        media_files: media.into_iter().map(MediaFileResponseDto::from).collect(),
    };

    Ok(Json(ApiResponse::success(Some(detail), None, None)))
}

/// Partially update a complaint
#[utoipa::path(
    patch,
    path = "/api/complaints/{id}",
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    request_body = UpdateComplaintDto,
    responses(
        (status = 200, description = "Complaint updated", body = ApiResponse<ComplaintResponseDto>),
        (status = 400, description = "Validation error or backwards status move"),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints"
)]
pub async fn update_complaint(
    State(state): State<ComplaintState>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<UpdateComplaintDto>,
) -> Result<Json<ApiResponse<ComplaintResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let complaint = state.complaint_service.update(id, &dto).await?;
    Ok(Json(ApiResponse::success(
        Some(complaint.into()),
        Some("Complaint updated successfully".to_string()),
        None,
    )))
}

/// Delete a complaint and its media files
#[utoipa::path(
    delete,
    path = "/api/complaints/{id}",
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    responses(
        (status = 200, description = "Complaint deleted"),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints"
)]
pub async fn delete_complaint(
    State(state): State<ComplaintState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>> {
    state.complaint_service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Complaint deleted successfully".to_string()),
        None,
    )))
}

/// Move a complaint to a new lifecycle status
#[utoipa::path(
    patch,
    path = "/api/complaints/{id}/status",
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    request_body = UpdateComplaintStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<ComplaintResponseDto>),
        (status = 400, description = "Unknown status or backwards move"),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints"
)]
pub async fn update_complaint_status(
    State(state): State<ComplaintState>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<UpdateComplaintStatusDto>,
) -> Result<Json<ApiResponse<ComplaintResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let complaint = state.complaint_service.update_status(id, &dto).await?;
    Ok(Json(ApiResponse::success(
        Some(complaint.into()),
        Some("Complaint status updated successfully".to_string()),
        None,
    )))
}

/// Record the outcome of a PNR check
#[utoipa::path(
    patch,
    path = "/api/complaints/{id}/pnr",
    params(
        ("id" = i32, Path, description = "Complaint ID")
    ),
    request_body = ValidatePnrDto,
    responses(
        (status = 200, description = "PNR check recorded", body = ApiResponse<ComplaintResponseDto>),
        (status = 400, description = "Unknown validation state"),
        (status = 404, description = "Complaint not found")
    ),
    tag = "complaints"
)]
pub async fn validate_pnr(
    State(state): State<ComplaintState>,
    Path(id): Path<i32>,
    AppJson(dto): AppJson<ValidatePnrDto>,
) -> Result<Json<ApiResponse<ComplaintResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let complaint = state.complaint_service.validate_pnr(id, &dto).await?;
    Ok(Json(ApiResponse::success(
        Some(complaint.into()),
        Some("PNR validation recorded successfully".to_string()),
        None,
    )))
}
