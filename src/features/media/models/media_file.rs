use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::media::dtos::MediaFileResponseDto;

/// Database model for a complaint media attachment
#[derive(Debug, Clone, FromRow)]
pub struct MediaFile {
    pub id: i32,
    pub complain_id: i32,
    pub media_type: Option<String>,
    pub media_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

impl From<MediaFile> for MediaFileResponseDto {
    fn from(m: MediaFile) -> Self {
        Self {
            id: m.id,
            complain_id: m.complain_id,
            media_type: m.media_type,
            media_url: m.media_url,
            created_at: m.created_at,
            updated_at: m.updated_at,
            created_by: m.created_by,
            updated_by: m.updated_by,
        }
    }
}
