//! PostgreSQL implementation of SurveyResponseRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, instrument};
use uuid::Uuid;

use survey_core::entities::{NewSurveyResponse, SurveyResponse};
use survey_core::traits::{RepoResult, SurveyResponseRepository};

use crate::mappers::SurveyResponseInsert;
use crate::models::SurveyResponseModel;

use super::error::map_db_error;

/// Postgres rejects statements with more than this many bind parameters
const MAX_BIND_PARAMS: usize = 65_535;

/// Rows per INSERT statement
const INSERT_CHUNK_SIZE: usize = MAX_BIND_PARAMS / SurveyResponseInsert::COLUMNS;

/// PostgreSQL implementation of SurveyResponseRepository
#[derive(Clone)]
pub struct PgSurveyResponseRepository {
    pool: PgPool,
}

impl PgSurveyResponseRepository {
    /// Create a new PgSurveyResponseRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SurveyResponseRepository for PgSurveyResponseRepository {
    #[instrument(skip(self, responses), fields(rows = responses.len()))]
    async fn insert_many(&self, responses: &[NewSurveyResponse]) -> RepoResult<u64> {
        if responses.is_empty() {
            return Ok(0);
        }

        // All chunks commit together so a failed import leaves nothing behind
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let mut inserted = 0;

        for chunk in responses.chunks(INSERT_CHUNK_SIZE) {
            let mut builder = QueryBuilder::<Postgres>::new(
                "INSERT INTO survey_responses \
                 (id, survey_id, email, first_name, last_name, responded_on, student_id) ",
            );

            builder.push_values(chunk.iter().map(SurveyResponseInsert::new), |mut row, r| {
                row.push_bind(r.id)
                    .push_bind(r.survey_id)
                    .push_bind(r.email)
                    .push_bind(r.first_name)
                    .push_bind(r.last_name)
                    .push_bind(r.responded_on)
                    .push_bind(r.student_id);
            });
            builder.push(" ON CONFLICT DO NOTHING");

            let result = builder
                .build()
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;

            inserted += result.rows_affected();
        }

        tx.commit().await.map_err(map_db_error)?;

        debug!(
            rows = responses.len(),
            inserted,
            "Survey responses written"
        );

        Ok(inserted)
    }

    #[instrument(skip(self))]
    async fn find_by_survey(&self, survey_id: Uuid) -> RepoResult<Vec<SurveyResponse>> {
        let results = sqlx::query_as::<_, SurveyResponseModel>(
            r"
            SELECT id, survey_id, email, first_name, last_name, responded_on, student_id,
                   created_at
            FROM survey_responses
            WHERE survey_id = $1
            ORDER BY responded_on, email
            ",
        )
        .bind(survey_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(SurveyResponse::from).collect())
    }
}
