//! Member identity records.

use chrono::{DateTime, Utc};
use common::MemberId;
use serde::{Deserialize, Serialize};

/// A person who can be assigned to event positions.
///
/// Identity is immutable; profile fields are owned by an external
/// profile-management collaborator and may change between reads. Members are
/// never deleted from this core's perspective; an assignment referencing an
/// id that no longer resolves degrades to an absent profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: MemberId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Creates a member record with freshly stamped timestamps.
    pub fn new(
        id: MemberId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns "first last" for display.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
