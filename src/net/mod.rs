//! HTTP client for the ChoreStar family server.
//!
//! All calls are synchronous and run on the UI thread with short
//! timeouts; the app works fully offline with sample data when no
//! server is configured.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::stats::{ChildStats, DailyProgress};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// The request never completed (connection refused, timeout, DNS).
    #[error("could not reach server: {0}")]
    Transport(String),
    /// The response body was not what we expected.
    #[error("unexpected server response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Short message suitable for an error toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server { message, .. } => message.clone(),
            Self::Transport(_) => "Could not reach the server".to_string(),
            Self::Decode(_) => "Unexpected reply from the server".to_string(),
        }
    }
}

/// Body of a server error response
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// One assignable task as the server reports it
#[derive(Debug, Clone, Deserialize)]
pub struct TaskItem {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub icon: String,
    pub points: u32,
    #[serde(default)]
    pub completed: bool,
}

/// One child in the family overview
#[derive(Debug, Clone, Deserialize)]
pub struct ChildRecord {
    pub id: u64,
    pub name: String,
    /// Avatar key within the child's theme (e.g. "steve")
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub theme: String,
    #[serde(flatten)]
    pub stats: ChildStats,
    #[serde(default)]
    pub today: DailyProgress,
    #[serde(default)]
    pub tasks: Vec<TaskItem>,
}

/// Everything the dashboard needs in one fetch
#[derive(Debug, Clone, Deserialize)]
pub struct FamilyOverview {
    pub family_name: String,
    pub join_code: String,
    #[serde(default)]
    pub pending_approvals: u32,
    pub children: Vec<ChildRecord>,
}

/// Result of completing a task
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionOutcome {
    pub awarded: u32,
    pub new_points: u32,
    pub streak: u32,
}

pub struct ApiClient {
    base_url: String,
    agent: ureq::Agent,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(timeout)
            .build();

        Self {
            base_url: base_url.into(),
            agent,
        }
    }

    pub fn family_overview(&self) -> Result<FamilyOverview, ApiError> {
        let url = format!("{}/api/family/overview", self.base_url);
        decode(self.agent.get(&url).call())
    }

    pub fn complete_task(&self, child_id: u64, task_id: u64) -> Result<CompletionOutcome, ApiError> {
        let url = format!("{}/api/tasks/{}/complete", self.base_url, task_id);
        decode(
            self.agent
                .post(&url)
                .send_json(serde_json::json!({ "child_id": child_id })),
        )
    }

    pub fn claim_reward(&self, child_id: u64, reward_id: u64) -> Result<(), ApiError> {
        let url = format!("{}/api/rewards/{}/claim", self.base_url, reward_id);
        match self
            .agent
            .post(&url)
            .send_json(serde_json::json!({ "child_id": child_id }))
        {
            Ok(_) => Ok(()),
            Err(e) => Err(map_error(e)),
        }
    }
}

fn decode<T: for<'de> Deserialize<'de>>(
    result: Result<ureq::Response, ureq::Error>,
) -> Result<T, ApiError> {
    match result {
        Ok(response) => response
            .into_json()
            .map_err(|e| ApiError::Decode(e.to_string())),
        Err(e) => Err(map_error(e)),
    }
}

fn map_error(error: ureq::Error) -> ApiError {
    match error {
        ureq::Error::Status(status, response) => {
            // The server sends {"error": "..."} bodies; fall back to the
            // status line when it doesn't.
            let message = response
                .into_json::<ErrorBody>()
                .map(|body| body.error)
                .unwrap_or_else(|_| format!("request failed with status {}", status));
            warn!("api request failed ({}): {}", status, message);
            ApiError::Server { status, message }
        }
        ureq::Error::Transport(t) => {
            warn!("api transport error: {}", t);
            ApiError::Transport(t.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_overview_decodes() {
        let json = r#"{
            "family_name": "The Parkers",
            "join_code": "STAR-4821",
            "pending_approvals": 2,
            "children": [
                {
                    "id": 1,
                    "name": "Maya",
                    "avatar": "steve",
                    "theme": "minecraft",
                    "current_streak": 7,
                    "lifetime_points": 980,
                    "tasks_completed": 54,
                    "kindness_acts": 3,
                    "today": {"completed": 2, "total": 5},
                    "tasks": [
                        {"id": 11, "title": "Make Bed", "icon": "🛏️", "points": 10}
                    ]
                }
            ]
        }"#;

        let overview: FamilyOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.join_code, "STAR-4821");
        assert_eq!(overview.children.len(), 1);

        let child = &overview.children[0];
        assert_eq!(child.stats.current_streak, 7);
        assert_eq!(child.stats.lifetime_points, 980);
        assert_eq!(child.today.completed, 2);
        assert!(!child.tasks[0].completed);
    }

    #[test]
    fn test_child_record_defaults() {
        // A minimal child payload still decodes.
        let json = r#"{"id": 2, "name": "Leo"}"#;
        let child: ChildRecord = serde_json::from_str(json).unwrap();
        assert_eq!(child.stats.lifetime_points, 0);
        assert!(child.theme.is_empty());
        assert!(child.tasks.is_empty());
        assert_eq!(child.today.total, 0);
    }

    #[test]
    fn test_user_messages() {
        let err = ApiError::Server {
            status: 403,
            message: "Task already completed today".to_string(),
        };
        assert_eq!(err.user_message(), "Task already completed today");

        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), "Could not reach the server");
    }
}
