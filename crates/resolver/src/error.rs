//! Resolver error types.

use common::{EventId, MemberId};
use store::StoreError;
use thiserror::Error;

/// Errors that can occur while resolving a view.
///
/// Absence of the *requested* record is a distinct signal from an empty
/// result: a member with no assignments resolves to an empty schedule, a
/// member id that doesn't exist is `MemberNotFound`. Store failures are
/// transient and safe to retry; no partial view is ever returned.
///
/// An inverted date range is deliberately not represented here; it
/// resolves to an empty event list by contract.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The requested member id does not exist.
    #[error("Member not found: {0}")]
    MemberNotFound(MemberId),

    /// The requested event id does not exist.
    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    /// An error occurred talking to the scheduling store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for resolver operations.
pub type Result<T> = std::result::Result<T, ResolveError>;
