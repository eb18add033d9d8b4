//! Axum extractors for request handling

mod csv;
mod path;

pub use csv::CsvBody;
pub use path::SurveyIdPath;
