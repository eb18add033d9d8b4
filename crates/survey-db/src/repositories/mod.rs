//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in survey-core.

mod error;
mod member;
mod survey_response;

pub use member::PgMemberRepository;
pub use survey_response::PgSurveyResponseRepository;
