use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for attaching a media file to a complaint
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AttachMediaDto {
    /// Media kind, e.g. "image" or "video"
    #[validate(length(min = 1, max = 50, message = "Media type must be 1-50 characters"))]
    pub media_type: String,

    /// Location of the stored media object
    #[validate(length(min = 1, message = "Media URL must not be empty"))]
    pub media_url: String,

    /// Name recorded as the uploader
    #[validate(length(max = 255, message = "Created by must not exceed 255 characters"))]
    pub created_by: Option<String>,
}

/// Request DTO for deleting selected media files of a complaint
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct DeleteMediaDto {
    /// Ids of the media rows to delete
    #[validate(length(min = 1, message = "media_ids must not be empty"))]
    pub media_ids: Vec<i32>,
}

/// Response DTO for a media attachment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MediaFileResponseDto {
    pub id: i32,
    pub complain_id: i32,
    pub media_type: Option<String>,
    pub media_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}
