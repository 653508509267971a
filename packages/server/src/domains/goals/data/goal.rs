use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domains::goals::models::goal::{Goal as GoalModel, GoalStatus, NewGoal};

/// Goal API data type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalData {
    pub id: String,
    pub title: String,
    pub description: String,
    pub progress: i32,
    pub status: GoalStatus,
    pub tags: Vec<String>,
    pub author: String,
    pub updated_at: DateTime<Utc>,
}

impl From<GoalModel> for GoalData {
    fn from(goal: GoalModel) -> Self {
        Self {
            id: goal.id.to_string(),
            title: goal.title,
            description: goal.description,
            progress: goal.progress,
            status: goal.status,
            tags: goal.tags,
            author: goal.author,
            updated_at: goal.updated_at,
        }
    }
}

/// Request body for creating or updating a goal.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalInput {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub progress: i32,
    pub status: GoalStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: String,
}

impl From<GoalInput> for NewGoal {
    fn from(input: GoalInput) -> Self {
        Self {
            title: input.title,
            description: input.description,
            // Schema enforces 0-100; clamp here so sloppy clients get a row
            // instead of a constraint violation.
            progress: input.progress.clamp(0, 100),
            status: input.status,
            tags: input.tags,
            author: input.author,
        }
    }
}
