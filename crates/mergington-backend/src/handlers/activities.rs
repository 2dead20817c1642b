use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde::Deserialize;

use mergington::data::{ActivityListing, MessageResponse};
use mergington::log;

use super::ApiError;
use crate::services::RosterService;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// Only presence is checked; any value the query carries, empty included, is taken as given.
fn require_email(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, ApiError> {
    query
        .map(|Query(EmailQuery { email })| email)
        .map_err(|_| ApiError::MissingEmail)
}

/// Handler to list every activity with its roster
pub async fn list(State(state): State<Arc<crate::AppState>>) -> Json<ActivityListing> {
    Json(state.catalog.list())
}

/// Handler to sign a student up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    Path(activity): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = require_email(query)?;

    let updated = state.roster.signup(&activity, &email).await?;
    log::info!(
        "Signed up {} for {} ({} participants)",
        email,
        activity,
        updated.participants.len()
    );

    Ok(Json(MessageResponse::signed_up(&activity, &email, updated)))
}

/// Handler to remove a student from an activity
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    Path(activity): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = require_email(query)?;

    let updated = state.roster.unregister(&activity, &email).await?;
    log::info!(
        "Unregistered {} from {} ({} participants)",
        email,
        activity,
        updated.participants.len()
    );

    Ok(Json(MessageResponse::unregistered(&activity, &email, updated)))
}
