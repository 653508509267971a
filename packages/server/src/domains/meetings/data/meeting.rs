use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domains::meetings::models::meeting::{Meeting as MeetingModel, NewMeeting};

/// Meeting API data type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingData {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub summary: Option<String>,
    pub decisions: Vec<String>,
    pub next_actions: Vec<String>,
}

impl From<MeetingModel> for MeetingData {
    fn from(meeting: MeetingModel) -> Self {
        Self {
            id: meeting.id.to_string(),
            title: meeting.title,
            date: meeting.date,
            summary: meeting.summary,
            decisions: meeting.decisions,
            next_actions: meeting.next_actions,
        }
    }
}

/// Request body for creating or updating a meeting record.
#[derive(Debug, Clone, Deserialize)]
pub struct MeetingInput {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub decisions: Vec<String>,
    #[serde(default)]
    pub next_actions: Vec<String>,
}

impl From<MeetingInput> for NewMeeting {
    fn from(input: MeetingInput) -> Self {
        Self {
            title: input.title,
            date: input.date,
            summary: input.summary,
            decisions: input.decisions,
            next_actions: input.next_actions,
        }
    }
}
