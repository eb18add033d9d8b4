//! Survey response record validation
//!
//! Converts a raw CSV row into a validated record, or rejects it.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use survey_core::{DomainError, NewSurveyResponse};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::csv_reader::CsvRow;

pub const EMAIL_COLUMN: &str = "Email";
pub const FIRST_NAME_COLUMN: &str = "First Name";
pub const LAST_NAME_COLUMN: &str = "Last Name";
pub const RESPONDED_ON_COLUMN: &str = "Responded On";

/// Date-only formats accepted for `Responded On`, taken at midnight UTC
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Offset-less timestamps accepted for `Responded On`, taken as UTC
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A validated CSV row
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct SurveyResponseRecord {
    #[validate(
        email(message = "Invalid email format"),
        custom(function = "validate_email_domain")
    )]
    pub email: String,

    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,

    pub responded_on: DateTime<Utc>,
}

impl SurveyResponseRecord {
    /// Validate the row at `index`
    ///
    /// # Errors
    /// Returns `DomainError::InvalidRow` carrying the row's raw email when any
    /// required column is missing or invalid
    pub fn from_row(index: usize, row: &CsvRow) -> Result<Self, DomainError> {
        Self::parse(row).map_err(|reason| {
            tracing::debug!(index, reason = %reason, "Rejected CSV row");
            DomainError::InvalidRow {
                index,
                email: row.get(EMAIL_COLUMN).unwrap_or_default().to_string(),
            }
        })
    }

    fn parse(row: &CsvRow) -> Result<Self, String> {
        let column = |name: &str| row.get(name).ok_or_else(|| format!("missing column '{name}'"));

        let raw_responded_on = column(RESPONDED_ON_COLUMN)?;
        let record = Self {
            email: normalize_email(column(EMAIL_COLUMN)?),
            first_name: column(FIRST_NAME_COLUMN)?.trim().to_string(),
            last_name: column(LAST_NAME_COLUMN)?.trim().to_string(),
            responded_on: parse_responded_on(raw_responded_on)
                .ok_or_else(|| format!("unrecognized date '{raw_responded_on}'"))?,
        };

        record.validate().map_err(|e| e.to_string())?;

        Ok(record)
    }

    /// Build the response to insert for this record
    pub fn into_response(self, survey_id: Uuid) -> NewSurveyResponse {
        NewSurveyResponse::new(
            survey_id,
            self.email,
            self.first_name,
            self.last_name,
            self.responded_on,
        )
    }
}

/// Trim and lower-case an email address
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Require a domain of at least two non-empty labels
fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let dotted = email.rsplit_once('@').is_some_and(|(_, domain)| {
        domain.contains('.') && !domain.split('.').any(str::is_empty)
    });

    if dotted {
        Ok(())
    } else {
        let mut err = ValidationError::new("email_domain");
        err.message = Some("Email domain must contain a dot".into());
        Err(err)
    }
}

/// Parse a `Responded On` value
pub fn parse_responded_on(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    if let Some(timestamp) = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(timestamp.and_utc());
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}
