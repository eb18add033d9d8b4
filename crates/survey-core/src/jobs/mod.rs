//! Background jobs - work handed off to other workers
//!
//! Job names follow `<queue>.<event>`; the part before the first dot picks
//! the queue a job is routed to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// All jobs this service can emit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", content = "data")]
pub enum Job {
    #[serde(rename = "gamification.activity.completed")]
    GamificationActivityCompleted(GamificationActivity),
}

impl Job {
    /// Get the job name
    pub fn name(&self) -> &'static str {
        match self {
            Self::GamificationActivityCompleted(_) => "gamification.activity.completed",
        }
    }

    /// Get the queue this job is routed to
    pub fn queue(&self) -> &'static str {
        let name = self.name();
        name.split_once('.').map_or(name, |(queue, _)| queue)
    }

    /// Serialize the job payload
    pub fn payload(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            Self::GamificationActivityCompleted(activity) => serde_json::to_value(activity),
        }
    }

    /// Job recording that a member responded to a survey
    pub fn survey_responded(student_id: Uuid, survey_id: Uuid) -> Self {
        Self::GamificationActivityCompleted(GamificationActivity::RespondToSurvey {
            student_id,
            survey_responded_to: survey_id,
        })
    }
}

/// Activities that earn gamification points
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GamificationActivity {
    RespondToSurvey {
        #[serde(rename = "studentId")]
        student_id: Uuid,
        #[serde(rename = "surveyRespondedTo")]
        survey_responded_to: Uuid,
    },
}

/// Wire format for a queued job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobEnvelope {
    pub name: String,
    pub data: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl JobEnvelope {
    /// Wrap a job for the queue, stamped with the current time
    pub fn new(job: &Job) -> Result<Self, serde_json::Error> {
        Ok(Self {
            name: job.name().to_string(),
            data: job.payload()?,
            timestamp: Utc::now(),
        })
    }
}
