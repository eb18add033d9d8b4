//! CSV import building blocks: reading rows and validating records

pub mod csv_reader;
pub mod record;

pub use csv_reader::{parse_csv, CsvRow};
pub use record::{
    normalize_email, parse_responded_on, SurveyResponseRecord, EMAIL_COLUMN, FIRST_NAME_COLUMN,
    LAST_NAME_COLUMN, RESPONDED_ON_COLUMN,
};
