//! 숙제 상태 조회 도메인
//!
//! - API 클라이언트
//! - 응답 검증
//! - 상태 카탈로그와 알림 문구 생성

pub mod client;
pub mod status;
pub mod validator;

pub use client::{HomeworkApi, HomeworkApiClient, PracticumClient};
pub use status::{parse_status, HomeworkStatus};
pub use validator::{check_response, reported_date};
