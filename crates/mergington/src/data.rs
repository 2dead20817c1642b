//! Data structures exchanged between the Mergington backend and its clients.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An extracurricular activity and its current roster.
///
/// The activity's name is not part of the struct; it is the key under which
/// the activity is stored and listed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActivityInfo {
    pub description: String,
    pub schedule: String,
    /// Capacity of the activity. Reported to clients, not enforced on signup.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl ActivityInfo {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper for seeding an initial roster. Duplicate emails are dropped.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in participants {
            self.add_participant(email.into());
        }
        self
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Adds `email` to the roster. Returns `false` if it was already present.
    pub fn add_participant(&mut self, email: String) -> bool {
        if self.is_registered(&email) {
            return false;
        }
        self.participants.push(email);
        true
    }

    /// Removes `email` from the roster. Returns `false` if it was not present.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remaining capacity, saturating at zero when the roster is over capacity.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// The full catalog as returned by `GET /activities`, keyed by activity name.
pub type ActivityListing = BTreeMap<String, ActivityInfo>;

/// Confirmation body for successful roster changes, carrying the roster as it
/// stands after the change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
    pub participants: Vec<String>,
    pub spots_left: u32,
}

impl MessageResponse {
    fn with_roster(message: String, updated: ActivityInfo) -> Self {
        let spots_left = updated.spots_left();
        Self {
            message,
            participants: updated.participants,
            spots_left,
        }
    }

    pub fn signed_up(activity: &str, email: &str, updated: ActivityInfo) -> Self {
        Self::with_roster(format!("Signed up {email} for {activity}"), updated)
    }

    pub fn unregistered(activity: &str, email: &str, updated: ActivityInfo) -> Self {
        Self::with_roster(format!("Unregistered {email} from {activity}"), updated)
    }
}

/// Body of every client-visible failure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceInfo {
    pub activities: usize,
    pub participants: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub services: ServiceInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_club() -> ActivityInfo {
        ActivityInfo::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"])
    }

    #[test]
    fn add_participant_rejects_duplicates() {
        let mut activity = chess_club();

        assert!(activity.add_participant("emma@mergington.edu".to_string()));
        assert!(!activity.add_participant("emma@mergington.edu".to_string()));

        let count = activity
            .participants
            .iter()
            .filter(|p| *p == "emma@mergington.edu")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn remove_participant() {
        let mut activity = chess_club();

        assert!(activity.remove_participant("michael@mergington.edu"));
        assert!(!activity.is_registered("michael@mergington.edu"));

        // Second removal finds nothing and leaves the roster alone
        assert!(!activity.remove_participant("michael@mergington.edu"));
        assert_eq!(activity.participants, vec!["daniel@mergington.edu"]);
    }

    #[test]
    fn seeding_drops_duplicates() {
        let activity = ActivityInfo::new("Desc", "Mondays", 5)
            .with_participants(["a@mergington.edu", "a@mergington.edu"]);
        assert_eq!(activity.participants.len(), 1);
    }

    #[test]
    fn spots_left_saturates() {
        let activity = ActivityInfo::new("Desc", "Mondays", 1)
            .with_participants(["a@mergington.edu", "b@mergington.edu"]);
        assert_eq!(activity.spots_left(), 0);
        assert_eq!(chess_club().spots_left(), 10);
    }

    #[test]
    fn activity_wire_format() {
        let json = serde_json::to_value(chess_club()).unwrap();

        assert_eq!(json["schedule"], "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(json["max_participants"], 12);
        assert_eq!(json["participants"][0], "michael@mergington.edu");
    }

    #[test]
    fn confirmation_carries_updated_roster() {
        let mut activity = chess_club();
        activity.add_participant("a@mergington.edu".to_string());

        let signed_up = MessageResponse::signed_up("Chess Club", "a@mergington.edu", activity);
        assert_eq!(signed_up.message, "Signed up a@mergington.edu for Chess Club");
        assert_eq!(signed_up.participants.len(), 3);
        assert_eq!(signed_up.spots_left, 9);

        let unregistered =
            MessageResponse::unregistered("Chess Club", "a@mergington.edu", chess_club());
        assert_eq!(
            unregistered.message,
            "Unregistered a@mergington.edu from Chess Club"
        );
        assert_eq!(unregistered.spots_left, 10);
    }

    #[test]
    fn health_status_serializes_lowercase() {
        let json = serde_json::to_string(&HealthStatus::Healthy).unwrap();
        assert_eq!(json, "\"healthy\"");
    }
}
