//! Survey response database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for survey_responses table
#[derive(Debug, Clone, FromRow)]
pub struct SurveyResponseModel {
    pub id: Uuid,
    pub survey_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub responded_on: DateTime<Utc>,
    pub student_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
