//! Survey import service
//!
//! Imports survey responses from CSV, links them to members by email, and
//! hands off gamification jobs for the linked ones.

use futures::future::try_join_all;
use survey_core::{Job, NewSurveyResponse};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::dto::{ImportSurveyResponsesResult, SurveyResponseDto};
use crate::import::{parse_csv, CsvRow, SurveyResponseRecord};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Survey import service
pub struct SurveyImportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SurveyImportService<'a> {
    /// Create a new SurveyImportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Import every row of `csv` as a response to `survey_id`
    ///
    /// The import is all or nothing: a malformed file or a single invalid
    /// row fails it before anything is written. Responses already stored for
    /// the same survey and email are skipped, but still counted.
    #[instrument(skip(self, csv), fields(bytes = csv.len()))]
    pub async fn import_responses(
        &self,
        survey_id: Uuid,
        csv: &str,
    ) -> ServiceResult<ImportSurveyResponsesResult> {
        let rows = parse_csv(csv)?;

        let responses = try_join_all(
            rows.iter()
                .enumerate()
                .map(|(index, row)| self.build_response(survey_id, index, row)),
        )
        .await?;

        let inserted = self
            .ctx
            .survey_response_repo()
            .insert_many(&responses)
            .await?;

        self.dispatch_activity_jobs(&responses);

        info!(
            survey_id = %survey_id,
            count = responses.len(),
            inserted,
            "Survey responses imported"
        );

        Ok(ImportSurveyResponsesResult {
            count: responses.len(),
        })
    }

    /// List the stored responses for a survey
    #[instrument(skip(self))]
    pub async fn list_responses(&self, survey_id: Uuid) -> ServiceResult<Vec<SurveyResponseDto>> {
        let responses = self
            .ctx
            .survey_response_repo()
            .find_by_survey(survey_id)
            .await?;

        Ok(responses.iter().map(SurveyResponseDto::from).collect())
    }

    async fn build_response(
        &self,
        survey_id: Uuid,
        index: usize,
        row: &CsvRow,
    ) -> ServiceResult<NewSurveyResponse> {
        let record = SurveyResponseRecord::from_row(index, row)?;
        let member = self.ctx.member_repo().find_by_email(&record.email).await?;

        Ok(record
            .into_response(survey_id)
            .with_student(member.map(|m| m.id)))
    }

    /// Spawn one job per linked response without waiting on any of them
    fn dispatch_activity_jobs(&self, responses: &[NewSurveyResponse]) {
        for response in responses {
            let Some(student_id) = response.student_id else {
                continue;
            };

            let job = Job::survey_responded(student_id, response.survey_id);
            let dispatcher = self.ctx.job_dispatcher();

            debug!(student_id = %student_id, job = job.name(), "Dispatching job");

            tokio::spawn(async move {
                let _ = dispatcher.dispatch(&job).await;
            });
        }
    }
}
