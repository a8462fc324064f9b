//! 사용자 생성/수정 요청 DTO
//!
//! 요청 본문은 타입이 정해진 구조체로 바로 역직렬화하지 않고,
//! 먼저 JSON 객체로 읽어 검증 게이트에 넘깁니다. 게이트를 통과한 뒤에만
//! [`UserPayload`]로 변환됩니다.

use std::fmt;
use serde_json::{Map, Value};
use crate::core::errors::{AppError, AppResult};
use crate::validation::messages::MALFORMED_BODY_MESSAGE;

/// 요청 본문을 JSON 객체로 디코딩합니다.
///
/// - 빈 본문(공백 포함)은 빈 객체로 취급합니다.
/// - JSON이 아니거나 객체가 아닌 값은 검증 에러가 됩니다.
///
/// # 예제
///
/// ```rust,ignore
/// let object = parse_json_object(br#"{"name": "Alice"}"#)?;
/// assert_eq!(object["name"], "Alice");
/// ```
pub fn parse_json_object(body: &[u8]) -> AppResult<Map<String, Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(object)) => Ok(object),
        _ => Err(AppError::validation(MALFORMED_BODY_MESSAGE)),
    }
}

/// 검증 게이트를 통과한 사용자 입력
///
/// 생성 요청에서는 모든 필드가 `Some`이고, 수정 요청에서는 본문에 있던 필드만 `Some`입니다.
#[derive(Clone, Default, PartialEq)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    /// 평문 비밀번호. 서비스 계층에서 해싱된 뒤 버려집니다.
    pub password: Option<String>,
}

impl UserPayload {
    /// 검증된 JSON 객체에서 알려진 필드만 추출합니다. 알 수 없는 키는 무시됩니다.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);

        Self {
            name: text("name"),
            email: text("email"),
            password: text("password"),
        }
    }
}

impl fmt::Debug for UserPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPayload")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
