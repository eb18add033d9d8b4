//! Survey response entities

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A survey response ready to be written to the store
///
/// Built once per imported row and handed to
/// [`SurveyResponseRepository::insert_many`](crate::traits::SurveyResponseRepository::insert_many).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSurveyResponse {
    pub id: Uuid,
    pub survey_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub responded_on: DateTime<Utc>,
    /// Matched member, if the email belongs to one
    pub student_id: Option<Uuid>,
}

impl NewSurveyResponse {
    /// Create a new response with a freshly generated id and no linked member
    pub fn new(
        survey_id: Uuid,
        email: String,
        first_name: String,
        last_name: String,
        responded_on: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            survey_id,
            email,
            first_name,
            last_name,
            responded_on,
            student_id: None,
        }
    }

    /// Link the response to a member
    #[must_use]
    pub fn with_student(mut self, student_id: Option<Uuid>) -> Self {
        self.student_id = student_id;
        self
    }
}

/// A persisted survey response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyResponse {
    pub id: Uuid,
    pub survey_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub responded_on: DateTime<Utc>,
    pub student_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
