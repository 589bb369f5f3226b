use chrono::NaiveTime;
use sqlx::FromRow;

use crate::features::trains::dtos::TrainResponseDto;

/// Database model for train details
#[derive(Debug, Clone, FromRow)]
pub struct Train {
    pub id: i32,
    pub train_no: String,
    pub train_name: Option<String>,
    pub depot: Option<String>,
    pub source: Option<String>,
    pub destination: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub arrival_time: Option<NaiveTime>,
}

impl From<Train> for TrainResponseDto {
    fn from(t: Train) -> Self {
        Self {
            id: t.id,
            train_no: t.train_no,
            train_name: t.train_name,
            depot: t.depot,
            source: t.source,
            destination: t.destination,
            start_time: t.start_time,
            arrival_time: t.arrival_time,
        }
    }
}
