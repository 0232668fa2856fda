use serde_json::Value;

use crate::utils::BotError;

/// API 응답 구조를 검증하고 숙제 목록을 그대로 반환합니다.
///
/// 확인 순서: 객체 여부 → `homeworks` 키 → `current_date` 키 →
/// `homeworks` 배열 여부 → `current_date` 정수 여부.
/// 빈 목록은 정상 응답입니다.
pub fn check_response(response: &Value) -> Result<&[Value], BotError> {
    let body = response
        .as_object()
        .ok_or_else(|| BotError::type_mismatch("response", "object"))?;

    let homeworks = body
        .get("homeworks")
        .ok_or(BotError::MissingKey("homeworks"))?;
    let current_date = body
        .get("current_date")
        .ok_or(BotError::MissingKey("current_date"))?;

    let homeworks = homeworks
        .as_array()
        .ok_or_else(|| BotError::type_mismatch("homeworks", "array"))?;

    if current_date.as_i64().is_none() {
        return Err(BotError::type_mismatch("current_date", "integer"));
    }

    Ok(homeworks.as_slice())
}

/// 응답에 담긴 서버 기준 시각 (unix 초)
pub fn reported_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}
