//! Port traits implemented by infrastructure crates

mod jobs;
mod repositories;

pub use jobs::JobDispatcher;
pub use repositories::{MemberRepository, RepoResult, SurveyResponseRepository};
