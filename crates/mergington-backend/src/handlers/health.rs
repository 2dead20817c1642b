use std::sync::Arc;

use axum::{Json, extract::State};
use mergington::data::{HealthResponse, HealthStatus, ServiceInfo, UptimeInfo};
use mergington::log;

fn human_readable_uptime(uptime: chrono::TimeDelta) -> String {
    let uptime_seconds = uptime.num_seconds();
    let days = uptime.num_days();
    let hours = (uptime_seconds % 86400) / 3600;
    let minutes = (uptime_seconds % 3600) / 60;
    let secs = uptime_seconds % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {secs}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

fn service_uptime(started_at: chrono::DateTime<chrono::Utc>) -> UptimeInfo {
    let uptime = chrono::Utc::now().signed_duration_since(started_at);
    UptimeInfo {
        seconds: uptime.num_seconds(),
        human: human_readable_uptime(uptime),
    }
}

pub async fn get(State(state): State<Arc<crate::AppState>>) -> Json<HealthResponse> {
    let health_response = HealthResponse {
        status: HealthStatus::Healthy,
        timestamp: chrono::Utc::now().to_rfc3339(),
        started_at: state.started_at.to_rfc3339(),
        uptime: service_uptime(state.started_at),
        services: ServiceInfo {
            activities: state.catalog.activity_count(),
            participants: state.catalog.participant_count(),
        },
    };

    log::debug!("Health check: {:?}", health_response);

    Json(health_response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn uptime_formatting() {
        assert_eq!(human_readable_uptime(TimeDelta::seconds(42)), "42s");
        assert_eq!(human_readable_uptime(TimeDelta::seconds(125)), "2m 5s");
        assert_eq!(human_readable_uptime(TimeDelta::seconds(3_725)), "1h 2m 5s");
        assert_eq!(
            human_readable_uptime(TimeDelta::seconds(90_061)),
            "1d 1h 1m 1s"
        );
    }

    #[test]
    fn uptime_since_start() {
        let started_at = chrono::Utc::now() - TimeDelta::seconds(90);
        let uptime = service_uptime(started_at);
        assert!(uptime.seconds >= 90);
        assert!(uptime.human.starts_with("1m"));
    }
}
