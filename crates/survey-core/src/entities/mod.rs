//! Domain entities - core business objects

mod member;
mod survey_response;

pub use member::Member;
pub use survey_response::{NewSurveyResponse, SurveyResponse};
