//! Path parameter extractors

use serde::Deserialize;
use uuid::Uuid;

use crate::response::ApiError;

/// Path parameters with survey_id
#[derive(Debug, Deserialize)]
pub struct SurveyIdPath {
    pub survey_id: String,
}

impl SurveyIdPath {
    /// Parse survey_id as a UUID
    pub fn survey_id(&self) -> Result<Uuid, ApiError> {
        self.survey_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid survey_id format"))
    }
}
