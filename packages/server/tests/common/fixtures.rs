//! Row factories for integration tests. Insert directly through the models
//! so route tests control their own starting state.

use chrono::NaiveDate;
use sqlx::PgPool;

use server_core::domains::goals::models::goal::{Goal, GoalStatus, NewGoal};
use server_core::domains::meetings::models::meeting::{Meeting, NewMeeting};
use server_core::domains::members::models::member::{Member, NewMember};

pub async fn create_member(pool: &PgPool, name: &str, display_order: Option<i32>) -> Member {
    Member::insert(
        &NewMember {
            name: name.to_string(),
            role: "member".to_string(),
            display_order,
            ..Default::default()
        },
        pool,
    )
    .await
    .expect("Failed to insert member fixture")
}

pub async fn create_meeting(pool: &PgPool, title: &str, date: NaiveDate) -> Meeting {
    Meeting::insert(
        &NewMeeting {
            title: title.to_string(),
            date,
            summary: None,
            decisions: vec!["decision".to_string()],
            next_actions: vec!["action".to_string()],
        },
        pool,
    )
    .await
    .expect("Failed to insert meeting fixture")
}

pub async fn create_goal(pool: &PgPool, title: &str, progress: i32) -> Goal {
    Goal::insert(
        &NewGoal {
            title: title.to_string(),
            description: "test goal".to_string(),
            progress,
            status: GoalStatus::InProgress,
            tags: vec!["test".to_string()],
            author: "tester".to_string(),
        },
        pool,
    )
    .await
    .expect("Failed to insert goal fixture")
}
