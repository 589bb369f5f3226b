use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for adding a train
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTrainDto {
    /// Train number, e.g. "12951"
    #[validate(length(min = 1, max = 50, message = "Train number must be 1-50 characters"))]
    pub train_no: String,

    #[validate(length(max = 255, message = "Train name must not exceed 255 characters"))]
    pub train_name: Option<String>,

    #[validate(length(max = 100, message = "Depot must not exceed 100 characters"))]
    pub depot: Option<String>,

    pub source: Option<String>,
    pub destination: Option<String>,

    /// Departure time at origin, "HH:MM:SS"
    pub start_time: Option<NaiveTime>,

    /// Arrival time at destination, "HH:MM:SS"
    pub arrival_time: Option<NaiveTime>,
}

/// Response DTO for train details
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TrainResponseDto {
    pub id: i32,
    pub train_no: String,
    pub train_name: Option<String>,
    pub depot: Option<String>,
    pub source: Option<String>,
    pub destination: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub arrival_time: Option<NaiveTime>,
}
