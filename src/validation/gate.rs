//! 사용자 리소스의 검증 게이트
//!
//! 핸들러에서 받은 입력은 이 게이트를 통과해야만 저장소에 도달합니다.
//! 실패 시 모든 위반 메시지를 담은 [`AppError::ValidationError`]를 반환합니다.

use serde_json::{Map, Value};
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::UserPayload;
use super::engine::{evaluate, RecordLookup, Violation};
use super::messages::MessageCatalog;
use super::rules::{identifier_rules, parse_integer, user_payload_rules, Rule, ID_FIELD};

#[derive(Clone, Default)]
pub struct ValidationGate {
    catalog: MessageCatalog,
}

impl ValidationGate {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self { catalog }
    }

    /// 경로의 식별자를 검증하고 정수로 변환합니다.
    ///
    /// 필수 값, 정수 형식, 레코드 존재 여부를 차례로 확인합니다.
    pub async fn validate_identifier<L>(&self, raw: &str, lookup: &L) -> AppResult<i64>
    where
        L: RecordLookup + ?Sized,
    {
        let mut input = Map::new();
        input.insert(ID_FIELD.to_string(), Value::String(raw.to_string()));

        let violations = evaluate(&identifier_rules(), &input, &self.catalog, lookup).await?;
        if !violations.is_empty() {
            return Err(self.reject(violations));
        }

        parse_integer(&input[ID_FIELD])
            .ok_or_else(|| AppError::validation(self.catalog.render(ID_FIELD, &Rule::Integer)))
    }

    /// 사용자 본문을 검증합니다.
    ///
    /// * `require_all` - 생성 요청은 모든 필드가 필수
    /// * `ignore_id` - 수정 대상 식별자 (자기 이메일 재사용 허용)
    pub async fn validate_user_payload<L>(
        &self,
        payload: &Map<String, Value>,
        require_all: bool,
        ignore_id: Option<i64>,
        lookup: &L,
    ) -> AppResult<UserPayload>
    where
        L: RecordLookup + ?Sized,
    {
        let rules = user_payload_rules(require_all, ignore_id);
        let violations = evaluate(&rules, payload, &self.catalog, lookup).await?;
        if !violations.is_empty() {
            return Err(self.reject(violations));
        }

        Ok(UserPayload::from_object(payload))
    }

    fn reject(&self, violations: Vec<Violation>) -> AppError {
        let messages: Vec<String> = violations.into_iter().map(|v| v.message).collect();
        log::debug!("검증 실패: {:?}", messages);
        AppError::ValidationError(messages)
    }
}
