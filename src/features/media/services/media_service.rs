//! Media attachment service

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::media::dtos::AttachMediaDto;
use crate::features::media::models::MediaFile;

const MEDIA_COLUMNS: &str =
    "id, complain_id, media_type, media_url, created_at, updated_at, created_by, updated_by";

/// Service for complaint media attachments
pub struct MediaService {
    pool: PgPool,
}

impl MediaService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach a media file to a complaint.
    ///
    /// The FK reports a missing complaint, so no row is ever inserted for
    /// an id that does not exist.
    pub async fn attach(&self, complain_id: i32, dto: AttachMediaDto) -> Result<MediaFile> {
        let sql = format!(
            r#"
            INSERT INTO rail_sathi_complain_media_files
                (complain_id, media_type, media_url, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING {}
            "#,
            MEDIA_COLUMNS
        );

        let media = sqlx::query_as::<_, MediaFile>(&sql)
            .bind(complain_id)
            .bind(&dto.media_type)
            .bind(&dto.media_url)
            .bind(&dto.created_by)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if e.as_database_error()
                    .is_some_and(|d| d.is_foreign_key_violation())
                {
                    return AppError::NotFound(format!("Complaint {} not found", complain_id));
                }
                tracing::error!(
                    "Failed to attach media to complaint {}: {:?}",
                    complain_id,
                    e
                );
                AppError::Database(e)
            })?;

        tracing::info!(
            "Media attached: id={}, complain_id={}, type={}",
            media.id,
            media.complain_id,
            dto.media_type
        );

        Ok(media)
    }

    /// List media files of a complaint in insertion order.
    ///
    /// A complaint without media (or one already deleted) yields an empty
    /// list rather than an error.
    pub async fn list_for(&self, complain_id: i32) -> Result<Vec<MediaFile>> {
        let sql = format!(
            "SELECT {} FROM rail_sathi_complain_media_files WHERE complain_id = $1 ORDER BY id",
            MEDIA_COLUMNS
        );

        sqlx::query_as::<_, MediaFile>(&sql)
            .bind(complain_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to list media for complaint {}: {:?}",
                    complain_id,
                    e
                );
                AppError::Database(e)
            })
    }

    /// Delete a single media file by id
    pub async fn detach(&self, media_id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM rail_sathi_complain_media_files WHERE id = $1")
            .bind(media_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete media file {}: {:?}", media_id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Media file {} not found",
                media_id
            )));
        }

        tracing::info!("Media file deleted: id={}", media_id);

        Ok(())
    }

    /// Delete the given media files of one complaint.
    ///
    /// The complaint itself must exist; ids belonging to other complaints
    /// are ignored by the WHERE clause.
    pub async fn delete_for(&self, complain_id: i32, media_ids: &[i32]) -> Result<u64> {
        if media_ids.is_empty() {
            return Err(AppError::Validation(
                "media_ids must not be empty".to_string(),
            ));
        }

        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM rail_sathi_complains WHERE complain_id = $1)",
        )
        .bind(complain_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to check complaint {}: {:?}", complain_id, e);
            AppError::Database(e)
        })?;

        if !exists {
            return Err(AppError::NotFound(format!(
                "Complaint {} not found",
                complain_id
            )));
        }

        let result = sqlx::query(
            "DELETE FROM rail_sathi_complain_media_files WHERE complain_id = $1 AND id = ANY($2)",
        )
        .bind(complain_id)
        .bind(media_ids)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to delete media for complaint {}: {:?}",
                complain_id,
                e
            );
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::BadRequest(
                "No matching media files found for deletion".to_string(),
            ));
        }

        tracing::info!(
            "Deleted {} media files for complaint {}",
            result.rows_affected(),
            complain_id
        );

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::setup_test_db;

    async fn insert_complaint(pool: &PgPool) -> i32 {
        sqlx::query_scalar(
            r#"
            INSERT INTO rail_sathi_complains (name, mobile_number, complain_type)
            VALUES ('Media Test', '+91-9876543210', 'Cleanliness')
            RETURNING complain_id
            "#,
        )
        .fetch_one(pool)
        .await
        .expect("insert complaint fixture")
    }

    fn attach_dto(url: &str) -> AttachMediaDto {
        AttachMediaDto {
            media_type: "image".to_string(),
            media_url: url.to_string(),
            created_by: Some("Media Test".to_string()),
        }
    }

    #[tokio::test]
    #[ignore = "requires migrated database"]
    async fn test_attach_and_list_in_insertion_order() {
        let pool = setup_test_db().await;
        let service = MediaService::new(pool.clone());
        let complain_id = insert_complaint(&pool).await;

        let first = service
            .attach(complain_id, attach_dto("https://cdn.example/one.jpg"))
            .await
            .expect("attach first");
        let second = service
            .attach(complain_id, attach_dto("https://cdn.example/two.jpg"))
            .await
            .expect("attach second");

        let listed = service.list_for(complain_id).await.expect("list media");
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, first.id);
        assert_eq!(listed[1].id, second.id);
        assert!(listed[0].id < listed[1].id);
    }

    #[tokio::test]
    #[ignore = "requires migrated database"]
    async fn test_attach_to_missing_complaint_inserts_nothing() {
        let pool = setup_test_db().await;
        let service = MediaService::new(pool.clone());

        let before: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM rail_sathi_complain_media_files")
                .fetch_one(&pool)
                .await
                .expect("count media");

        let err = service
            .attach(-1, attach_dto("https://cdn.example/orphan.jpg"))
            .await
            .expect_err("attach to missing complaint must fail");
        assert!(matches!(err, AppError::NotFound(_)));

        let after: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rail_sathi_complain_media_files")
            .fetch_one(&pool)
            .await
            .expect("count media");
        assert_eq!(before, after);
    }

    #[tokio::test]
    #[ignore = "requires migrated database"]
    async fn test_detach_unknown_media_is_not_found() {
        let pool = setup_test_db().await;
        let service = MediaService::new(pool);

        let err = service.detach(-1).await.expect_err("detach must fail");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    #[ignore = "requires migrated database"]
    async fn test_bulk_delete_ignores_foreign_ids() {
        let pool = setup_test_db().await;
        let service = MediaService::new(pool.clone());

        let own = insert_complaint(&pool).await;
        let other = insert_complaint(&pool).await;

        let mine = service
            .attach(own, attach_dto("https://cdn.example/mine.jpg"))
            .await
            .expect("attach own");
        let theirs = service
            .attach(other, attach_dto("https://cdn.example/theirs.jpg"))
            .await
            .expect("attach other");

        // Asking to delete both under `own` only removes the row owned by `own`.
        let deleted = service
            .delete_for(own, &[mine.id, theirs.id])
            .await
            .expect("bulk delete");
        assert_eq!(deleted, 1);

        let remaining = service.list_for(other).await.expect("list other");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, theirs.id);
    }

    #[tokio::test]
    #[ignore = "requires migrated database"]
    async fn test_bulk_delete_empty_ids_is_validation_error() {
        let pool = setup_test_db().await;
        let service = MediaService::new(pool.clone());
        let complain_id = insert_complaint(&pool).await;

        let err = service
            .delete_for(complain_id, &[])
            .await
            .expect_err("empty id list must fail");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    #[ignore = "requires migrated database"]
    async fn test_bulk_delete_without_matches_is_bad_request() {
        let pool = setup_test_db().await;
        let service = MediaService::new(pool.clone());
        let complain_id = insert_complaint(&pool).await;

        let err = service
            .delete_for(complain_id, &[-5, -6])
            .await
            .expect_err("no matching rows must fail");
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
