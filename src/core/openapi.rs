use utoipa::{Modify, OpenApi};

use crate::features::complaints::{
    dtos as complaints_dtos, handlers as complaints_handlers, models as complaints_models,
};
use crate::features::media::{dtos as media_dtos, handlers as media_handlers};
use crate::features::trains::{dtos as trains_dtos, handlers as trains_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Complaints
        complaints_handlers::complaint_handler::create_complaint,
        complaints_handlers::complaint_handler::list_complaints,
        complaints_handlers::complaint_handler::get_complaint,
        complaints_handlers::complaint_handler::update_complaint,
        complaints_handlers::complaint_handler::delete_complaint,
        complaints_handlers::complaint_handler::update_complaint_status,
        complaints_handlers::complaint_handler::validate_pnr,
        // Media
        media_handlers::media_handler::attach_media,
        media_handlers::media_handler::list_media,
        media_handlers::media_handler::delete_media_bulk,
        media_handlers::media_handler::detach_media,
        // Trains
        trains_handlers::train_handler::list_trains,
        trains_handlers::train_handler::create_train,
        trains_handlers::train_handler::get_train,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Complaints
            complaints_models::ComplaintStatus,
            complaints_models::PnrValidationState,
            complaints_dtos::CreateComplaintDto,
            complaints_dtos::UpdateComplaintDto,
            complaints_dtos::UpdateComplaintStatusDto,
            complaints_dtos::ValidatePnrDto,
            complaints_dtos::ComplaintResponseDto,
            complaints_dtos::ComplaintDetailResponseDto,
            ApiResponse<complaints_dtos::ComplaintDetailResponseDto>,
            ApiResponse<complaints_dtos::ComplaintResponseDto>,
            ApiResponse<Vec<complaints_dtos::ComplaintResponseDto>>,
            // Media
            media_dtos::AttachMediaDto,
            media_dtos::DeleteMediaDto,
            media_dtos::MediaFileResponseDto,
            ApiResponse<media_dtos::MediaFileResponseDto>,
            ApiResponse<Vec<media_dtos::MediaFileResponseDto>>,
            // Trains
            trains_dtos::CreateTrainDto,
            trains_dtos::TrainResponseDto,
            ApiResponse<trains_dtos::TrainResponseDto>,
            ApiResponse<Vec<trains_dtos::TrainResponseDto>>,
        )
    ),
    tags(
        (name = "complaints", description = "Complaint lifecycle management"),
        (name = "media", description = "Complaint media attachments"),
        (name = "trains", description = "Train reference data"),
    ),
    info(
        title = "Rail Sathi Complaint API",
        version = "1.0.0",
        description = "API for handling rail complaints",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
