//! Member entity - a directory entry that survey responses can link to

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Member directory entry
///
/// A member owns a primary email and may own additional ones; lookups by
/// email match any of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// Create a new Member with a fresh id
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            created_at: Utc::now(),
        }
    }
}
