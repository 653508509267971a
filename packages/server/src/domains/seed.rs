//! Startup seeding: insert the founding members and kickoff meetings when the
//! corresponding tables are empty. Idempotent; existing data is left alone.

use anyhow::Result;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domains::meetings::models::meeting::{Meeting, NewMeeting};
use crate::domains::members::models::member::{Member, NewMember};

fn default_members() -> Vec<NewMember> {
    vec![
        NewMember {
            name: "김지수".to_string(),
            role: "프로젝트 리더".to_string(),
            comment: Some("함께 배우는 즐거움을 나누고 싶어요".to_string()),
            instagram: Some("#".to_string()),
            linkedin: Some("#".to_string()),
            ..Default::default()
        },
        NewMember {
            name: "이민호".to_string(),
            role: "개발자".to_string(),
            comment: Some("코드로 꿈을 현실로 만들어요".to_string()),
            facebook: Some("#".to_string()),
            linkedin: Some("#".to_string()),
            ..Default::default()
        },
        NewMember {
            name: "박서연".to_string(),
            role: "디자이너".to_string(),
            comment: Some("아름다운 경험을 디자인합니다".to_string()),
            instagram: Some("#".to_string()),
            facebook: Some("#".to_string()),
            ..Default::default()
        },
        NewMember {
            name: "최준영".to_string(),
            role: "기획자".to_string(),
            comment: Some("모두의 아이디어를 하나로".to_string()),
            linkedin: Some("#".to_string()),
            ..Default::default()
        },
    ]
}

fn default_meetings() -> Vec<NewMeeting> {
    vec![
        NewMeeting {
            title: "프로젝트 킥오프 미팅".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 11, 1).expect("valid date"),
            summary: Some("프로젝트 비전과 목표 설정".to_string()),
            decisions: vec![
                "프로젝트명을 \"다시 학교\"로 확정".to_string(),
                "2주 단위 스프린트 진행".to_string(),
                "매주 화요일 정기 회의".to_string(),
            ],
            next_actions: vec![
                "프로젝트 로드맵 작성".to_string(),
                "개발 환경 구성".to_string(),
                "디자인 시안 초안 작성".to_string(),
            ],
        },
        NewMeeting {
            title: "첫 번째 스프린트 회고".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 11, 8).expect("valid date"),
            summary: Some("초기 개발 진행 상황 점검".to_string()),
            decisions: vec![
                "기술 스택 확정".to_string(),
                "호스팅 백엔드 사용 결정".to_string(),
            ],
            next_actions: vec![
                "컴포넌트 구조 설계".to_string(),
                "API 엔드포인트 정의".to_string(),
            ],
        },
    ]
}

/// Seed default data into empty tables.
pub async fn seed_database(pool: &PgPool) -> Result<()> {
    if Member::count(pool).await? == 0 {
        for member in default_members() {
            Member::insert(&member, pool).await?;
        }
        tracing::info!("Seeded default members");
    }

    if Meeting::count(pool).await? == 0 {
        for meeting in default_meetings() {
            Meeting::insert(&meeting, pool).await?;
        }
        tracing::info!("Seeded default meetings");
    }

    Ok(())
}
