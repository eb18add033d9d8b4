//! Survey response entity <-> model mapper

use chrono::{DateTime, Utc};
use survey_core::entities::{NewSurveyResponse, SurveyResponse};
use uuid::Uuid;

use crate::models::SurveyResponseModel;

/// Convert SurveyResponseModel to SurveyResponse entity
impl From<SurveyResponseModel> for SurveyResponse {
    fn from(model: SurveyResponseModel) -> Self {
        SurveyResponse {
            id: model.id,
            survey_id: model.survey_id,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            responded_on: model.responded_on,
            student_id: model.student_id,
            created_at: model.created_at,
        }
    }
}

/// Borrowed column values for inserting a NewSurveyResponse
pub struct SurveyResponseInsert<'a> {
    pub id: Uuid,
    pub survey_id: Uuid,
    pub email: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub responded_on: DateTime<Utc>,
    pub student_id: Option<Uuid>,
}

impl<'a> SurveyResponseInsert<'a> {
    /// Number of bound parameters per inserted row
    pub const COLUMNS: usize = 7;

    pub fn new(response: &'a NewSurveyResponse) -> Self {
        Self {
            id: response.id,
            survey_id: response.survey_id,
            email: &response.email,
            first_name: &response.first_name,
            last_name: &response.last_name,
            responded_on: response.responded_on,
            student_id: response.student_id,
        }
    }
}
