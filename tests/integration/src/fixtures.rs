//! Test fixtures and data generators
//!
//! Provides in-memory implementations of the service ports and reusable
//! CSV test data.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use survey_core::traits::{JobDispatcher, MemberRepository, RepoResult, SurveyResponseRepository};
use survey_core::{DomainError, Job, Member, NewSurveyResponse, SurveyResponse};
use survey_service::ServiceContext;
use tokio::sync::{mpsc, Notify};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Get a unique email address
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}{}@example.com", unique_suffix())
}

// ============================================================================
// Member directory
// ============================================================================

/// Member directory backed by a map from email to member
#[derive(Default)]
pub struct InMemoryMemberRepository {
    by_email: Mutex<HashMap<String, Member>>,
}

impl InMemoryMemberRepository {
    /// Register a member under its primary email and any extra addresses
    pub fn add(&self, member: &Member, extra_emails: &[&str]) {
        let mut by_email = self.by_email.lock().unwrap();
        by_email.insert(member.email.clone(), member.clone());
        for email in extra_emails {
            by_email.insert((*email).to_string(), member.clone());
        }
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Member>> {
        Ok(self.by_email.lock().unwrap().get(email).cloned())
    }
}

// ============================================================================
// Response store
// ============================================================================

/// Response store that ignores rows conflicting on (survey_id, email)
#[derive(Default)]
pub struct InMemorySurveyResponseRepository {
    rows: Mutex<Vec<SurveyResponse>>,
    insert_calls: AtomicU64,
    unavailable: bool,
}

impl InMemorySurveyResponseRepository {
    /// A store whose writes always fail
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    /// All stored rows, in insertion order
    pub fn rows(&self) -> Vec<SurveyResponse> {
        self.rows.lock().unwrap().clone()
    }

    /// Number of times `insert_many` was called
    pub fn insert_calls(&self) -> u64 {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SurveyResponseRepository for InMemorySurveyResponseRepository {
    async fn insert_many(&self, responses: &[NewSurveyResponse]) -> RepoResult<u64> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }

        let mut rows = self.rows.lock().unwrap();
        let mut inserted = 0;
        for response in responses {
            let exists = rows
                .iter()
                .any(|r| r.survey_id == response.survey_id && r.email == response.email);
            if exists {
                continue;
            }

            rows.push(SurveyResponse {
                id: response.id,
                survey_id: response.survey_id,
                email: response.email.clone(),
                first_name: response.first_name.clone(),
                last_name: response.last_name.clone(),
                responded_on: response.responded_on,
                student_id: response.student_id,
                created_at: Utc::now(),
            });
            inserted += 1;
        }

        Ok(inserted)
    }

    async fn find_by_survey(&self, survey_id: Uuid) -> RepoResult<Vec<SurveyResponse>> {
        let mut found: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.survey_id == survey_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| (a.responded_on, &a.email).cmp(&(b.responded_on, &b.email)));
        Ok(found)
    }
}

// ============================================================================
// Job dispatch
// ============================================================================

/// Dispatcher that forwards every job to a channel
pub struct RecordingJobDispatcher {
    tx: mpsc::UnboundedSender<Job>,
}

/// Receiving end of a [`RecordingJobDispatcher`]
pub struct DispatchedJobs {
    rx: mpsc::UnboundedReceiver<Job>,
}

impl RecordingJobDispatcher {
    pub fn new() -> (Self, DispatchedJobs) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, DispatchedJobs { rx })
    }
}

#[async_trait]
impl JobDispatcher for RecordingJobDispatcher {
    async fn dispatch(&self, job: &Job) -> RepoResult<()> {
        let _ = self.tx.send(job.clone());
        Ok(())
    }
}

impl DispatchedJobs {
    /// Wait for `count` jobs, then give spawned stragglers a moment to show up
    ///
    /// Returns every job received, which may be more than `count`.
    pub async fn collect(&mut self, count: usize) -> Vec<Job> {
        let mut jobs = Vec::new();
        while jobs.len() < count {
            match tokio::time::timeout(Duration::from_secs(2), self.rx.recv()).await {
                Ok(Some(job)) => jobs.push(job),
                _ => break,
            }
        }

        tokio::time::sleep(Duration::from_millis(50)).await;
        while let Ok(job) = self.rx.try_recv() {
            jobs.push(job);
        }
        jobs
    }
}

/// Dispatcher whose every dispatch fails
pub struct FailingJobDispatcher;

#[async_trait]
impl JobDispatcher for FailingJobDispatcher {
    async fn dispatch(&self, _job: &Job) -> RepoResult<()> {
        Err(DomainError::QueueError("queue offline".to_string()))
    }
}

/// Dispatcher that holds every job until released
#[derive(Default)]
pub struct GatedJobDispatcher {
    gate: Notify,
    started: AtomicUsize,
    finished: AtomicUsize,
}

impl GatedJobDispatcher {
    /// Let one held dispatch complete
    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }

    /// Wait until `count` dispatches have completed
    pub async fn wait_finished(&self, count: usize) -> bool {
        tokio::time::timeout(Duration::from_secs(2), async {
            while self.finished() < count {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .is_ok()
    }
}

#[async_trait]
impl JobDispatcher for GatedJobDispatcher {
    async fn dispatch(&self, _job: &Job) -> RepoResult<()> {
        self.started.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        self.finished.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Assembled ports
// ============================================================================

/// In-memory ports wired into a service context
pub struct TestPorts {
    pub members: Arc<InMemoryMemberRepository>,
    pub responses: Arc<InMemorySurveyResponseRepository>,
    pub jobs: DispatchedJobs,
    pub ctx: ServiceContext,
}

impl TestPorts {
    pub fn new() -> Self {
        Self::with_store(InMemorySurveyResponseRepository::default())
    }

    pub fn with_store(store: InMemorySurveyResponseRepository) -> Self {
        let members = Arc::new(InMemoryMemberRepository::default());
        let responses = Arc::new(store);
        let (dispatcher, jobs) = RecordingJobDispatcher::new();

        let ctx = ServiceContext::builder()
            .member_repo(members.clone())
            .survey_response_repo(responses.clone())
            .job_dispatcher(Arc::new(dispatcher))
            .build()
            .unwrap();

        Self {
            members,
            responses,
            jobs,
            ctx,
        }
    }
}

impl Default for TestPorts {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CSV data
// ============================================================================

/// Header every import file starts with
pub const CSV_HEADER: &str = "Email,First Name,Last Name,Responded On";

/// Builder for import files
#[derive(Debug, Clone)]
pub struct SurveyCsv {
    header: String,
    rows: Vec<String>,
}

impl SurveyCsv {
    pub fn new() -> Self {
        Self::with_header(CSV_HEADER)
    }

    pub fn with_header(header: &str) -> Self {
        Self {
            header: header.to_string(),
            rows: Vec::new(),
        }
    }

    /// Append a raw, already comma-joined row
    pub fn raw_row(mut self, row: &str) -> Self {
        self.rows.push(row.to_string());
        self
    }

    /// Append a row with the standard four columns
    pub fn row(self, email: &str, first_name: &str, last_name: &str, responded_on: &str) -> Self {
        self.raw_row(&format!("{email},{first_name},{last_name},{responded_on}"))
    }

    /// Append `count` valid rows with unique emails
    pub fn unique_rows(mut self, count: usize) -> Self {
        for i in 0..count {
            let email = unique_email("respondent");
            self = self.row(&email, "Test", &format!("Respondent{i}"), "2024-03-15");
        }
        self
    }

    pub fn build(&self) -> String {
        let mut text = self.header.clone();
        for row in &self.rows {
            text.push('\n');
            text.push_str(row);
        }
        text.push('\n');
        text
    }
}

impl Default for SurveyCsv {
    fn default() -> Self {
        Self::new()
    }
}
