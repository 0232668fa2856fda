use std::str::FromStr;

use serde_json::Value;

use crate::utils::BotError;

/// 리뷰 상태 카탈로그
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// 상태 코드에 대응하는 안내 문구
    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => {
                "Work has been reviewed: the reviewer liked everything. Hooray!"
            }
            HomeworkStatus::Reviewing => "Work has been taken for review by the reviewer.",
            HomeworkStatus::Rejected => "Work has been reviewed: the reviewer has comments.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(BotError::UnknownStatus(other.to_string())),
        }
    }
}

/// 숙제 항목에서 상태 변경 알림 문구를 만듭니다.
///
/// `homework_name`과 `status` 키는 각각 따로 확인합니다.
pub fn parse_status(homework: &Value) -> Result<String, BotError> {
    let item = homework
        .as_object()
        .ok_or_else(|| BotError::type_mismatch("homework", "object"))?;

    let name = item
        .get("homework_name")
        .ok_or(BotError::MissingKey("homework_name"))?
        .as_str()
        .ok_or_else(|| BotError::type_mismatch("homework_name", "string"))?;

    let status: HomeworkStatus = item
        .get("status")
        .ok_or(BotError::MissingKey("status"))?
        .as_str()
        .ok_or_else(|| BotError::type_mismatch("status", "string"))?
        .parse()?;

    Ok(format!(
        "Changed review status for \"{}\". {}",
        name,
        status.verdict()
    ))
}
