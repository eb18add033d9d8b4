//! Entity to model mappers
//!
//! Conversions between domain entities (survey-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database writes

mod member;
mod survey_response;

pub use survey_response::SurveyResponseInsert;
