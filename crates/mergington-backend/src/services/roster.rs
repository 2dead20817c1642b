use std::sync::Arc;

use async_trait::async_trait;

use mergington::data::ActivityInfo;
use mergington::errors::RosterError;

use super::ActivityCatalog;

/// A trait for adding and removing participants on an activity's roster.
///
/// Implementations look the activity up by name and guard every mutation with
/// a membership check, so a roster never holds the same email twice.
///
/// # Examples
///
/// ```rust
/// use mergington_backend::services::RosterService;
///
/// async fn move_student<R: RosterService>(roster: &R, email: &str) -> Result<(), R::Error> {
///     roster.unregister("Chess Club", email).await?;
///     roster.signup("Math Club", email).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait RosterService {
    /// The error type returned by operations on this service.
    type Error;

    /// Adds `email` to the roster of `activity`.
    ///
    /// # Errors
    ///
    /// Fails if the activity doesn't exist or the email is already on its roster.
    async fn signup(&self, activity: &str, email: &str) -> Result<ActivityInfo, Self::Error>;

    /// Removes `email` from the roster of `activity`.
    ///
    /// # Errors
    ///
    /// Fails if the activity doesn't exist or the email is not on its roster.
    async fn unregister(&self, activity: &str, email: &str) -> Result<ActivityInfo, Self::Error>;
}

/// Roster operations applied directly to a shared in-memory [`ActivityCatalog`].
pub struct RosterServiceInMemory {
    catalog: Arc<ActivityCatalog>,
}

impl RosterServiceInMemory {
    pub fn new(catalog: Arc<ActivityCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl RosterService for RosterServiceInMemory {
    type Error = RosterError;

    async fn signup(&self, activity: &str, email: &str) -> Result<ActivityInfo, Self::Error> {
        let mut entry = self
            .catalog
            .get_mut(activity)
            .ok_or_else(|| RosterError::NotFound(activity.to_string()))?;

        if !entry.add_participant(email.to_string()) {
            return Err(RosterError::AlreadyRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        Ok(entry.value().clone())
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<ActivityInfo, Self::Error> {
        let mut entry = self
            .catalog
            .get_mut(activity)
            .ok_or_else(|| RosterError::NotFound(activity.to_string()))?;

        if !entry.remove_participant(email) {
            return Err(RosterError::NotRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        Ok(entry.value().clone())
    }
}
