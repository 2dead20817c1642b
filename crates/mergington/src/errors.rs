//! Shared error types and utilities for the mergington project.
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Failures of the roster operations on a single activity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("Activity '{0}' not found")]
    NotFound(String),
    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { activity: String, email: String },
    #[error("{email} is not registered for {activity}")]
    NotRegistered { activity: String, email: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_error_messages() {
        let not_found = RosterError::NotFound("Knitting Circle".to_string());
        assert_eq!(not_found.to_string(), "Activity 'Knitting Circle' not found");

        let already = RosterError::AlreadyRegistered {
            activity: "Chess Club".to_string(),
            email: "michael@mergington.edu".to_string(),
        };
        assert_eq!(
            already.to_string(),
            "michael@mergington.edu is already signed up for Chess Club"
        );

        let missing = RosterError::NotRegistered {
            activity: "Math Club".to_string(),
            email: "nobody@mergington.edu".to_string(),
        };
        assert_eq!(
            missing.to_string(),
            "nobody@mergington.edu is not registered for Math Club"
        );
    }
}
