//! # survey-service
//!
//! Application layer containing the CSV import use case, its building
//! blocks, and DTOs.

pub mod dto;
pub mod import;
pub mod services;

pub use dto::{
    ApiResponse, HealthChecks, HealthResponse, ImportSurveyResponsesResult, ReadinessResponse,
    SurveyResponseDto,
};
pub use import::{parse_csv, CsvRow, SurveyResponseRecord};
pub use services::{
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SurveyImportService,
};
