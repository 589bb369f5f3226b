//! Train details service

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::trains::dtos::CreateTrainDto;
use crate::features::trains::models::Train;

const TRAIN_COLUMNS: &str =
    "id, train_no, train_name, depot, source, destination, start_time, arrival_time";

/// Service for train reference data
pub struct TrainService {
    pool: PgPool,
}

impl TrainService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all trains ordered by train number
    pub async fn list(&self) -> Result<Vec<Train>> {
        let sql = format!("SELECT {} FROM trains ORDER BY train_no", TRAIN_COLUMNS);

        sqlx::query_as::<_, Train>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list trains: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Add a train. Duplicate train numbers are rejected as a conflict.
    pub async fn create(&self, dto: CreateTrainDto) -> Result<Train> {
        let sql = format!(
            r#"
            INSERT INTO trains (train_no, train_name, depot, source, destination, start_time, arrival_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            TRAIN_COLUMNS
        );

        let train = sqlx::query_as::<_, Train>(&sql)
            .bind(&dto.train_no)
            .bind(&dto.train_name)
            .bind(&dto.depot)
            .bind(&dto.source)
            .bind(&dto.destination)
            .bind(dto.start_time)
            .bind(dto.arrival_time)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if e.as_database_error()
                    .is_some_and(|d| d.is_unique_violation())
                {
                    return AppError::Conflict(format!(
                        "Train '{}' already exists",
                        dto.train_no
                    ));
                }
                tracing::error!("Failed to insert train: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Train added: id={}, train_no={}", train.id, train.train_no);

        Ok(train)
    }

    /// Get a train by its number
    pub async fn get_by_number(&self, train_no: &str) -> Result<Train> {
        let sql = format!("SELECT {} FROM trains WHERE train_no = $1", TRAIN_COLUMNS);

        sqlx::query_as::<_, Train>(&sql)
            .bind(train_no)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch train {}: {:?}", train_no, e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Train '{}' not found", train_no)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::setup_test_db;

    #[tokio::test]
    #[ignore = "requires migrated database"]
    async fn test_create_and_get_train() {
        let pool = setup_test_db().await;
        let service = TrainService::new(pool);

        let train_no = format!("T{}", chrono::Utc::now().timestamp_micros());
        let created = service
            .create(CreateTrainDto {
                train_no: train_no.clone(),
                train_name: Some("Test Express".to_string()),
                depot: Some("TESTDEPOT".to_string()),
                source: Some("Origin".to_string()),
                destination: Some("Terminus".to_string()),
                start_time: None,
                arrival_time: None,
            })
            .await
            .expect("create train");

        let fetched = service.get_by_number(&train_no).await.expect("fetch train");
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.train_name.as_deref(), Some("Test Express"));
    }

    #[tokio::test]
    #[ignore = "requires migrated database"]
    async fn test_duplicate_train_no_is_conflict() {
        let pool = setup_test_db().await;
        let service = TrainService::new(pool);

        let train_no = format!("D{}", chrono::Utc::now().timestamp_micros());
        let dto = CreateTrainDto {
            train_no: train_no.clone(),
            train_name: None,
            depot: None,
            source: None,
            destination: None,
            start_time: None,
            arrival_time: None,
        };

        service.create(dto.clone()).await.expect("first insert");
        let err = service.create(dto).await.expect_err("duplicate must fail");
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    #[ignore = "requires migrated database"]
    async fn test_get_unknown_train_is_not_found() {
        let pool = setup_test_db().await;
        let service = TrainService::new(pool);

        let err = service
            .get_by_number("no-such-train")
            .await
            .expect_err("unknown train must fail");
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
