//! Train details handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::trains::dtos::{CreateTrainDto, TrainResponseDto};
use crate::features::trains::services::TrainService;
use crate::shared::types::ApiResponse;

/// List all train details
#[utoipa::path(
    get,
    path = "/api/trains",
    responses(
        (status = 200, description = "List of trains", body = ApiResponse<Vec<TrainResponseDto>>)
    ),
    tag = "trains"
)]
pub async fn list_trains(
    State(service): State<Arc<TrainService>>,
) -> Result<Json<ApiResponse<Vec<TrainResponseDto>>>> {
    let trains = service.list().await?;
    let dtos: Vec<TrainResponseDto> = trains.into_iter().map(|t| t.into()).collect();
    Ok(Json(ApiResponse::success(Some(dtos), None, None)))
}

/// Add a train
#[utoipa::path(
    post,
    path = "/api/trains",
    request_body = CreateTrainDto,
    responses(
        (status = 201, description = "Train added", body = ApiResponse<TrainResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Train number already exists")
    ),
    tag = "trains"
)]
pub async fn create_train(
    State(service): State<Arc<TrainService>>,
    AppJson(dto): AppJson<CreateTrainDto>,
) -> Result<(StatusCode, Json<ApiResponse<TrainResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let train = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(train.into()),
            Some("Train added successfully".to_string()),
            None,
        )),
    ))
}

/// Get a train by number
#[utoipa::path(
    get,
    path = "/api/trains/{train_no}",
    params(
        ("train_no" = String, Path, description = "Train number")
    ),
    responses(
        (status = 200, description = "Train found", body = ApiResponse<TrainResponseDto>),
        (status = 404, description = "Train not found")
    ),
    tag = "trains"
)]
pub async fn get_train(
    State(service): State<Arc<TrainService>>,
    Path(train_no): Path<String>,
) -> Result<Json<ApiResponse<TrainResponseDto>>> {
    let train = service.get_by_number(&train_no).await?;
    Ok(Json(ApiResponse::success(Some(train.into()), None, None)))
}
