//! Business logic services
//!
//! This module contains the service layer: the dependency container, the
//! service error type, and the survey import use case.

pub mod context;
pub mod error;
pub mod survey_import;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use survey_import::SurveyImportService;
