//! Survey response handlers
//!
//! Endpoints for importing and listing survey responses.

use axum::{
    extract::{Path, State},
    Json,
};
use survey_service::{
    ApiResponse, ImportSurveyResponsesResult, SurveyImportService, SurveyResponseDto,
};

use crate::extractors::{CsvBody, SurveyIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Import survey responses from a CSV upload
///
/// POST /surveys/{survey_id}/responses/import
pub async fn import_responses(
    State(state): State<AppState>,
    Path(path): Path<SurveyIdPath>,
    CsvBody(csv): CsvBody,
) -> ApiResult<Json<ImportSurveyResponsesResult>> {
    let survey_id = path.survey_id()?;

    let service = SurveyImportService::new(state.service_context());
    let result = service.import_responses(survey_id, &csv).await?;
    Ok(Json(result))
}

/// List stored responses for a survey
///
/// GET /surveys/{survey_id}/responses
pub async fn list_responses(
    State(state): State<AppState>,
    Path(path): Path<SurveyIdPath>,
) -> ApiResult<Json<ApiResponse<Vec<SurveyResponseDto>>>> {
    let survey_id = path.survey_id()?;

    let service = SurveyImportService::new(state.service_context());
    let responses = service.list_responses(survey_id).await?;
    Ok(Json(ApiResponse::new(responses)))
}
