use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Lifecycle status of a complaint, stored as kebab-case text.
///
/// Variant order is the direction of travel: a complaint may keep its
/// current status or move to a later one, never back to an earlier one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Type, ToSchema,
)]
#[sqlx(type_name = "VARCHAR", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ComplaintStatus {
    Pending,
    InProgress,
    Resolved,
    Closed,
}

impl ComplaintStatus {
    /// Wire values accepted by the API, used in error messages.
    pub const ALLOWED: &'static str = "pending, in-progress, resolved, closed";

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(ComplaintStatus::Pending),
            "in-progress" => Some(ComplaintStatus::InProgress),
            "resolved" => Some(ComplaintStatus::Resolved),
            "closed" => Some(ComplaintStatus::Closed),
            _ => None,
        }
    }

    /// Re-asserting the current status is allowed, as is skipping ahead.
    pub fn can_transition_to(self, next: ComplaintStatus) -> bool {
        next >= self
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplaintStatus::Pending => write!(f, "pending"),
            ComplaintStatus::InProgress => write!(f, "in-progress"),
            ComplaintStatus::Resolved => write!(f, "resolved"),
            ComplaintStatus::Closed => write!(f, "closed"),
        }
    }
}

/// Outcome of a PNR check, stored as kebab-case text.
///
/// Unlike [`ComplaintStatus`] this carries no ordering rule: a check can
/// be re-run and may overwrite any earlier outcome, including resetting
/// back to `not-attempted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "VARCHAR", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum PnrValidationState {
    NotAttempted,
    Valid,
    Invalid,
}

impl PnrValidationState {
    /// Wire values accepted by the API, used in error messages.
    pub const ALLOWED: &'static str = "not-attempted, valid, invalid";

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "not-attempted" => Some(PnrValidationState::NotAttempted),
            "valid" => Some(PnrValidationState::Valid),
            "invalid" => Some(PnrValidationState::Invalid),
            _ => None,
        }
    }
}

impl std::fmt::Display for PnrValidationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PnrValidationState::NotAttempted => write!(f, "not-attempted"),
            PnrValidationState::Valid => write!(f, "valid"),
            PnrValidationState::Invalid => write!(f, "invalid"),
        }
    }
}

/// Database model for a complaint.
///
/// `train_no` and `train_depot` are not columns of the complaints table;
/// they come from the LEFT JOIN against `trains` and are `None` when
/// `train_id` is unset or dangling.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Complaint {
    pub complain_id: i32,
    pub pnr_number: Option<String>,
    pub is_pnr_validated: PnrValidationState,
    pub name: Option<String>,
    pub mobile_number: Option<String>,
    pub complain_type: Option<String>,
    pub complain_description: Option<String>,
    pub complain_date: NaiveDate,
    pub complain_status: ComplaintStatus,
    pub train_id: Option<i32>,
    pub train_number: Option<String>,
    pub train_name: Option<String>,
    pub coach: Option<String>,
    pub berth_no: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
    pub train_no: Option<String>,
    pub train_depot: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_wire_format() {
        for status in [
            ComplaintStatus::Pending,
            ComplaintStatus::InProgress,
            ComplaintStatus::Resolved,
            ComplaintStatus::Closed,
        ] {
            assert_eq!(ComplaintStatus::parse(&status.to_string()), Some(status));
        }
        assert_eq!(ComplaintStatus::parse("in_progress"), None);
        assert_eq!(ComplaintStatus::parse("PENDING"), None);
        assert_eq!(ComplaintStatus::parse(""), None);
    }

    #[test]
    fn test_status_moves_forward_only() {
        use ComplaintStatus::*;

        assert!(Pending.can_transition_to(InProgress));
        assert!(Pending.can_transition_to(Closed));
        assert!(InProgress.can_transition_to(Resolved));
        assert!(Resolved.can_transition_to(Closed));

        assert!(!InProgress.can_transition_to(Pending));
        assert!(!Resolved.can_transition_to(InProgress));
        assert!(!Closed.can_transition_to(Resolved));
    }

    #[test]
    fn test_status_may_be_reasserted() {
        for status in [
            ComplaintStatus::Pending,
            ComplaintStatus::InProgress,
            ComplaintStatus::Resolved,
            ComplaintStatus::Closed,
        ] {
            assert!(status.can_transition_to(status));
        }
    }

    #[test]
    fn test_pnr_state_round_trips_through_wire_format() {
        for state in [
            PnrValidationState::NotAttempted,
            PnrValidationState::Valid,
            PnrValidationState::Invalid,
        ] {
            assert_eq!(PnrValidationState::parse(&state.to_string()), Some(state));
        }
        assert_eq!(PnrValidationState::parse("unknown"), None);
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&ComplaintStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let json = serde_json::to_string(&PnrValidationState::NotAttempted).unwrap();
        assert_eq!(json, "\"not-attempted\"");
    }
}
