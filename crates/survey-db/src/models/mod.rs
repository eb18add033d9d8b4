//! Database models - SQLx-compatible structs for PostgreSQL tables

mod member;
mod survey_response;

pub use member::MemberModel;
pub use survey_response::SurveyResponseModel;
