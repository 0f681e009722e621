//! Authenticated user identity as seen by the reporting layer.

use super::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user resolved by the authentication layer.
///
/// Reporting only reads the identifier and the signup timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    created_at: DateTime<Utc>,
}

impl User {
    /// Creates a user identity.
    #[must_use]
    pub const fn new(id: UserId, created_at: DateTime<Utc>) -> Self {
        Self { id, created_at }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the account creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whole UTC calendar days between account creation and `now`.
    ///
    /// An account created later the same day yields zero, as does a
    /// creation timestamp that lies after `now`.
    #[must_use]
    pub fn days_since_creation(&self, now: DateTime<Utc>) -> u64 {
        let elapsed = now
            .date_naive()
            .signed_duration_since(self.created_at.date_naive())
            .num_days();
        u64::try_from(elapsed).unwrap_or_default()
    }
}
