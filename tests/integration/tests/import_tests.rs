//! Import use case tests over in-memory ports
//!
//! Run with: cargo test -p integration-tests --test import_tests

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use integration_tests::{
    FailingJobDispatcher, GatedJobDispatcher, InMemoryMemberRepository,
    InMemorySurveyResponseRepository, SurveyCsv, TestPorts, CSV_HEADER,
};
use survey_core::{DomainError, GamificationActivity, Job, Member};
use survey_service::{ServiceContext, ServiceError, SurveyImportService};
use uuid::Uuid;

#[tokio::test]
async fn test_valid_rows_are_all_stored() {
    let mut ports = TestPorts::new();
    let survey_id = Uuid::new_v4();
    let csv = SurveyCsv::new().unique_rows(5).build();

    let result = SurveyImportService::new(&ports.ctx)
        .import_responses(survey_id, &csv)
        .await
        .unwrap();

    assert_eq!(result.count, 5);

    let rows = ports.responses.rows();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|r| r.survey_id == survey_id));

    let ids: HashSet<_> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), 5);

    // Nobody matched, so nothing was dispatched
    assert!(ports.jobs.collect(0).await.is_empty());
}

#[tokio::test]
async fn test_rows_keep_input_order() {
    let ports = TestPorts::new();
    let csv = SurveyCsv::new()
        .row("c@example.com", "C", "Three", "2024-03-15")
        .row("a@example.com", "A", "One", "2024-03-15")
        .row("b@example.com", "B", "Two", "2024-03-15")
        .build();

    SurveyImportService::new(&ports.ctx)
        .import_responses(Uuid::new_v4(), &csv)
        .await
        .unwrap();

    let emails: Vec<_> = ports.responses.rows().into_iter().map(|r| r.email).collect();
    assert_eq!(emails, ["c@example.com", "a@example.com", "b@example.com"]);
}

#[tokio::test]
async fn test_invalid_email_names_row_and_stores_nothing() {
    let ports = TestPorts::new();
    let csv = SurveyCsv::new()
        .row("ada@example.com", "Ada", "Lovelace", "2024-03-15")
        .row("grace@example.com", "Grace", "Hopper", "2024-03-15")
        .row("not an email", "Alan", "Turing", "2024-03-15")
        .build();

    let err = SurveyImportService::new(&ports.ctx)
        .import_responses(Uuid::new_v4(), &csv)
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("row #2"), "{message}");
    assert!(message.contains("not an email"), "{message}");
    assert_eq!(err.status_code(), 400);

    assert!(ports.responses.rows().is_empty());
    assert_eq!(ports.responses.insert_calls(), 0);
}

#[tokio::test]
async fn test_missing_column_fails_at_first_row() {
    let ports = TestPorts::new();
    let csv = SurveyCsv::with_header("Email,First Name,Last Name")
        .raw_row("ada@example.com,Ada,Lovelace")
        .raw_row("grace@example.com,Grace,Hopper")
        .build();

    let err = SurveyImportService::new(&ports.ctx)
        .import_responses(Uuid::new_v4(), &csv)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::InvalidRow { index: 0, .. })
    ));
    assert!(ports.responses.rows().is_empty());
}

#[tokio::test]
async fn test_matched_member_is_linked_and_rewarded() {
    let mut ports = TestPorts::new();
    let member = Member::new("ada@example.com", "Ada", "Lovelace");
    ports.members.add(&member, &[]);

    let survey_id = Uuid::new_v4();
    let csv = SurveyCsv::new()
        .row("ada@example.com", "Ada", "Lovelace", "2024-03-15")
        .row("guest@example.com", "Guest", "User", "2024-03-16")
        .build();

    SurveyImportService::new(&ports.ctx)
        .import_responses(survey_id, &csv)
        .await
        .unwrap();

    let rows = ports.responses.rows();
    let linked = rows.iter().find(|r| r.email == "ada@example.com").unwrap();
    let guest = rows.iter().find(|r| r.email == "guest@example.com").unwrap();
    assert_eq!(linked.student_id, Some(member.id));
    assert_eq!(guest.student_id, None);

    let jobs = ports.jobs.collect(1).await;
    assert_eq!(
        jobs,
        vec![Job::GamificationActivityCompleted(
            GamificationActivity::RespondToSurvey {
                student_id: member.id,
                survey_responded_to: survey_id,
            }
        )]
    );
}

#[tokio::test]
async fn test_member_matched_by_secondary_email() {
    let mut ports = TestPorts::new();
    let member = Member::new("ada@example.com", "Ada", "Lovelace");
    ports.members.add(&member, &["countess@example.com"]);

    let csv = SurveyCsv::new()
        .row("  Countess@Example.com ", "Ada", "Lovelace", "03/15/2024")
        .build();

    SurveyImportService::new(&ports.ctx)
        .import_responses(Uuid::new_v4(), &csv)
        .await
        .unwrap();

    let rows = ports.responses.rows();
    assert_eq!(rows[0].email, "countess@example.com");
    assert_eq!(rows[0].student_id, Some(member.id));
    assert_eq!(ports.jobs.collect(1).await.len(), 1);
}

#[tokio::test]
async fn test_reimport_counts_again_without_duplicates() {
    let mut ports = TestPorts::new();
    let member = Member::new("ada@example.com", "Ada", "Lovelace");
    ports.members.add(&member, &[]);

    let survey_id = Uuid::new_v4();
    let csv = SurveyCsv::new()
        .row("ada@example.com", "Ada", "Lovelace", "2024-03-15")
        .unique_rows(2)
        .build();

    let service = SurveyImportService::new(&ports.ctx);
    let first = service.import_responses(survey_id, &csv).await.unwrap();
    let second = service.import_responses(survey_id, &csv).await.unwrap();

    assert_eq!(first.count, 3);
    assert_eq!(second.count, 3);
    assert_eq!(ports.responses.rows().len(), 3);

    // Jobs go out for matched rows on every import, stored or skipped
    assert_eq!(ports.jobs.collect(2).await.len(), 2);
}

#[tokio::test]
async fn test_same_file_for_another_survey_is_stored_separately() {
    let ports = TestPorts::new();
    let csv = SurveyCsv::new().unique_rows(2).build();

    let service = SurveyImportService::new(&ports.ctx);
    service.import_responses(Uuid::new_v4(), &csv).await.unwrap();
    service.import_responses(Uuid::new_v4(), &csv).await.unwrap();

    assert_eq!(ports.responses.rows().len(), 4);
}

#[tokio::test]
async fn test_malformed_csv_is_rejected() {
    let ports = TestPorts::new();
    let csv = SurveyCsv::new()
        .row("ada@example.com", "Ada", "Lovelace", "2024-03-15")
        .raw_row("grace@example.com,Grace")
        .build();

    let err = SurveyImportService::new(&ports.ctx)
        .import_responses(Uuid::new_v4(), &csv)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Domain(DomainError::MalformedCsv(_))));
    assert!(ports.responses.rows().is_empty());
}

#[tokio::test]
async fn test_header_only_imports_nothing() {
    let ports = TestPorts::new();

    let result = SurveyImportService::new(&ports.ctx)
        .import_responses(Uuid::new_v4(), CSV_HEADER)
        .await
        .unwrap();

    assert_eq!(result.count, 0);
    assert!(ports.responses.rows().is_empty());
}

#[tokio::test]
async fn test_storage_failure_propagates() {
    let ports = TestPorts::with_store(InMemorySurveyResponseRepository::unavailable());
    let csv = SurveyCsv::new().unique_rows(1).build();

    let err = SurveyImportService::new(&ports.ctx)
        .import_responses(Uuid::new_v4(), &csv)
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Domain(DomainError::DatabaseError(_))));
    assert_eq!(err.status_code(), 500);
}

#[tokio::test]
async fn test_dispatch_failure_does_not_fail_import() {
    let members = Arc::new(InMemoryMemberRepository::default());
    let member = Member::new("ada@example.com", "Ada", "Lovelace");
    members.add(&member, &[]);
    let responses = Arc::new(InMemorySurveyResponseRepository::default());

    let ctx = ServiceContext::builder()
        .member_repo(members)
        .survey_response_repo(responses.clone())
        .job_dispatcher(Arc::new(FailingJobDispatcher))
        .build()
        .unwrap();

    let csv = SurveyCsv::new()
        .row("ada@example.com", "Ada", "Lovelace", "2024-03-15")
        .build();

    let result = SurveyImportService::new(&ctx)
        .import_responses(Uuid::new_v4(), &csv)
        .await
        .unwrap();

    assert_eq!(result.count, 1);
    assert_eq!(responses.rows().len(), 1);
}

#[tokio::test]
async fn test_import_returns_while_dispatch_is_pending() {
    let members = Arc::new(InMemoryMemberRepository::default());
    let member = Member::new("ada@example.com", "Ada", "Lovelace");
    members.add(&member, &[]);
    let responses = Arc::new(InMemorySurveyResponseRepository::default());
    let dispatcher = Arc::new(GatedJobDispatcher::default());

    let ctx = ServiceContext::builder()
        .member_repo(members)
        .survey_response_repo(responses.clone())
        .job_dispatcher(dispatcher.clone())
        .build()
        .unwrap();

    let csv = SurveyCsv::new()
        .row("ada@example.com", "Ada", "Lovelace", "2024-03-15")
        .build();

    let result = tokio::time::timeout(
        Duration::from_secs(2),
        SurveyImportService::new(&ctx).import_responses(Uuid::new_v4(), &csv),
    )
    .await
    .expect("import waited on job dispatch")
    .unwrap();

    assert_eq!(result.count, 1);
    assert_eq!(responses.rows().len(), 1);
    assert_eq!(dispatcher.finished(), 0);

    dispatcher.release();
    assert!(dispatcher.wait_finished(1).await);
    assert_eq!(dispatcher.started(), 1);
}

#[tokio::test]
async fn test_list_responses_oldest_first() {
    let ports = TestPorts::new();
    let survey_id = Uuid::new_v4();
    let csv = SurveyCsv::new()
        .row("late@example.com", "Late", "Respondent", "2024-03-20")
        .row("early@example.com", "Early", "Respondent", "2024-03-01")
        .build();

    let service = SurveyImportService::new(&ports.ctx);
    service.import_responses(survey_id, &csv).await.unwrap();

    let listed = service.list_responses(survey_id).await.unwrap();
    let emails: Vec<_> = listed.iter().map(|r| r.email.as_str()).collect();
    assert_eq!(emails, ["early@example.com", "late@example.com"]);
}
