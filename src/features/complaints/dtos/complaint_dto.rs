use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::complaints::models::{Complaint, ComplaintStatus, PnrValidationState};
use crate::features::media::dtos::{AttachMediaDto, MediaFileResponseDto};
use crate::shared::validation::MOBILE_NUMBER_REGEX;

/// Request DTO for lodging a complaint
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateComplaintDto {
    #[validate(length(max = 255, message = "Name must not exceed 255 characters"))]
    pub name: Option<String>,

    /// Passenger contact number, e.g. `+91-9876543210`
    #[validate(
        length(max = 20, message = "Mobile number must not exceed 20 characters"),
        regex(path = *MOBILE_NUMBER_REGEX, message = "Invalid mobile number format")
    )]
    pub mobile_number: String,

    #[validate(length(max = 100, message = "Complaint type must not exceed 100 characters"))]
    pub complain_type: Option<String>,

    pub complain_description: Option<String>,

    /// Date the complaint is lodged for; defaults to today
    pub complain_date: Option<NaiveDate>,

    #[validate(length(max = 10, message = "PNR number must not exceed 10 characters"))]
    pub pnr_number: Option<String>,

    /// PNR check outcome when already known at submission; defaults to `not-attempted`
    pub is_pnr_validated: Option<String>,

    /// Initial lifecycle status; defaults to `pending`
    pub complain_status: Option<String>,

    pub train_id: Option<i32>,

    #[validate(length(max = 50, message = "Train number must not exceed 50 characters"))]
    pub train_number: Option<String>,

    #[validate(length(max = 255, message = "Train name must not exceed 255 characters"))]
    pub train_name: Option<String>,

    #[validate(length(max = 50, message = "Coach must not exceed 50 characters"))]
    pub coach: Option<String>,

    pub berth_no: Option<i32>,

    /// Journey start date; only used in the creation notification
    pub date_of_journey: Option<NaiveDate>,

    /// Media to attach in the same transaction as the complaint
    #[serde(default)]
    #[validate(nested)]
    pub media_files: Vec<AttachMediaDto>,
}

/// Request DTO for a partial complaint update
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateComplaintDto {
    #[validate(length(max = 10, message = "PNR number must not exceed 10 characters"))]
    pub pnr_number: Option<String>,

    /// PNR check outcome, e.g. `valid`
    pub is_pnr_validated: Option<String>,

    #[validate(length(max = 255, message = "Name must not exceed 255 characters"))]
    pub name: Option<String>,

    #[validate(
        length(max = 20, message = "Mobile number must not exceed 20 characters"),
        regex(path = *MOBILE_NUMBER_REGEX, message = "Invalid mobile number format")
    )]
    pub mobile_number: Option<String>,

    #[validate(length(max = 100, message = "Complaint type must not exceed 100 characters"))]
    pub complain_type: Option<String>,

    pub complain_description: Option<String>,

    pub complain_date: Option<NaiveDate>,

    /// Target lifecycle status, e.g. `in-progress`
    pub complain_status: Option<String>,

    pub train_id: Option<i32>,

    #[validate(length(max = 50, message = "Train number must not exceed 50 characters"))]
    pub train_number: Option<String>,

    #[validate(length(max = 255, message = "Train name must not exceed 255 characters"))]
    pub train_name: Option<String>,

    #[validate(length(max = 50, message = "Coach must not exceed 50 characters"))]
    pub coach: Option<String>,

    pub berth_no: Option<i32>,

    #[validate(length(max = 255, message = "Updated by must not exceed 255 characters"))]
    pub updated_by: Option<String>,
}

/// Request DTO for updating complaint status
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateComplaintStatusDto {
    /// Target status, e.g. `resolved`
    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,

    #[validate(length(max = 255, message = "Updated by must not exceed 255 characters"))]
    pub updated_by: Option<String>,
}

/// Request DTO for recording a PNR check outcome
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ValidatePnrDto {
    /// PNR check outcome, e.g. `valid`
    #[validate(length(min = 1, message = "PNR validation state is required"))]
    pub is_pnr_validated: String,

    #[validate(length(max = 255, message = "Updated by must not exceed 255 characters"))]
    pub updated_by: Option<String>,
}

/// Filter parameters for listing complaints
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListComplaintsQuery {
    /// Filter by lifecycle status, e.g. `pending`
    pub status: Option<String>,

    /// Filter by passenger mobile number (exact match)
    pub mobile_number: Option<String>,

    /// Only complaints lodged on or after this date
    pub date_from: Option<NaiveDate>,

    /// Only complaints lodged on or before this date
    pub date_to: Option<NaiveDate>,
}

/// Response DTO for complaint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComplaintResponseDto {
    pub complain_id: i32,
    pub pnr_number: Option<String>,
    pub is_pnr_validated: PnrValidationState,
    pub name: Option<String>,
    pub mobile_number: Option<String>,
    pub complain_type: Option<String>,
    pub complain_description: Option<String>,
    pub complain_date: NaiveDate,
    pub complain_status: ComplaintStatus,
    pub train_id: Option<i32>,
    pub train_number: Option<String>,
    pub train_name: Option<String>,
    pub coach: Option<String>,
    pub berth_no: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub train_no: Option<String>,
    pub train_depot: Option<String>,
}

impl From<Complaint> for ComplaintResponseDto {
    fn from(c: Complaint) -> Self {
        Self {
            complain_id: c.complain_id,
            pnr_number: c.pnr_number,
            is_pnr_validated: c.is_pnr_validated,
            name: c.name,
            mobile_number: c.mobile_number,
            complain_type: c.complain_type,
            complain_description: c.complain_description,
            complain_date: c.complain_date,
            complain_status: c.complain_status,
            train_id: c.train_id,
            train_number: c.train_number,
            train_name: c.train_name,
            coach: c.coach,
            berth_no: c.berth_no,
            created_at: c.created_at,
            updated_at: c.updated_at,
            created_by: c.created_by,
            updated_by: c.updated_by,
            train_no: c.train_no,
            train_depot: c.train_depot,
        }
    }
}

/// Response DTO for complaint with attached media
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComplaintDetailResponseDto {
    #[serde(flatten)]
    pub complaint: ComplaintResponseDto,
    pub media_files: Vec<MediaFileResponseDto>,
}
