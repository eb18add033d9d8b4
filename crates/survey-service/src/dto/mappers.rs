//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use survey_core::SurveyResponse;

use super::responses::SurveyResponseDto;

impl From<&SurveyResponse> for SurveyResponseDto {
    fn from(response: &SurveyResponse) -> Self {
        Self {
            id: response.id,
            survey_id: response.survey_id,
            email: response.email.clone(),
            first_name: response.first_name.clone(),
            last_name: response.last_name.clone(),
            responded_on: response.responded_on,
            student_id: response.student_id,
            created_at: response.created_at,
        }
    }
}

impl From<SurveyResponse> for SurveyResponseDto {
    fn from(response: SurveyResponse) -> Self {
        Self::from(&response)
    }
}
