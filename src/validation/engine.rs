//! 규칙 평가 엔진
//!
//! JSON 객체를 [`RuleSet`]에 대해 평가하고 위반 목록을 반환합니다.
//! 저장된 상태가 필요한 규칙(`Exists`, `Unique`)은 [`RecordLookup`]을 통해 조회합니다.
//!
//! 필드별 평가 순서:
//!
//! 1. 빈 값 검사 (`Required`)
//! 2. 로컬 규칙 (선언 순서, 타입 규칙 실패 시 해당 필드 중단)
//! 3. 로컬 규칙이 모두 통과한 경우에만 저장소 규칙

use async_trait::async_trait;
use serde_json::{Map, Value};
use validator::ValidateEmail;
use crate::core::errors::AppResult;
use super::messages::MessageCatalog;
use super::rules::{parse_integer, FieldRules, Rule, RuleSet};

/// 검증 규칙이 저장된 레코드를 조회하기 위한 추상화
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// `column` 값이 `value`인 레코드가 있는지 확인합니다.
    ///
    /// `except_id`가 주어지면 해당 식별자의 레코드는 제외합니다.
    async fn record_exists(
        &self,
        column: &str,
        value: &Value,
        except_id: Option<i64>,
    ) -> AppResult<bool>;
}

/// 규칙 위반 한 건
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub field: &'static str,
    pub rule: Rule,
    pub message: String,
}

/// 입력 객체를 규칙 집합으로 평가합니다.
///
/// 반환된 목록이 비어 있으면 통과입니다. 조회 실패는 위반이 아니라 에러로 전파됩니다.
pub async fn evaluate<L>(
    rules: &RuleSet,
    input: &Map<String, Value>,
    catalog: &MessageCatalog,
    lookup: &L,
) -> AppResult<Vec<Violation>>
where
    L: RecordLookup + ?Sized,
{
    let mut violations = Vec::new();

    for field_rules in rules.iter() {
        let field = field_rules.field;
        let value = match input.get(field) {
            Some(Value::Null) | None => None,
            Some(value) => Some(value),
        };

        let value = match value {
            Some(value) if !(field_rules.is_required() && is_blank(value)) => value,
            _ => {
                if field_rules.is_required() {
                    violations.push(violation(catalog, field, Rule::Required));
                }
                continue;
            }
        };

        let local_failures = check_local_rules(field_rules, value, catalog);
        // 형식이 잘못된 값은 저장소를 조회하지 않으므로 중복 메시지도 함께 나오지 않음
        if !local_failures.is_empty() {
            violations.extend(local_failures);
            continue;
        }

        let key = lookup_value(field_rules, value);
        for rule in field_rules.rules.iter().filter(|rule| rule.is_store_backed()) {
            let passed = match rule {
                Rule::Exists { column } => lookup.record_exists(column, &key, None).await?,
                Rule::Unique { column, ignore_id } => {
                    !lookup.record_exists(column, &key, *ignore_id).await?
                }
                _ => true,
            };

            if !passed {
                violations.push(violation(catalog, field, rule.clone()));
            }
        }
    }

    Ok(violations)
}

fn check_local_rules(
    field_rules: &FieldRules,
    value: &Value,
    catalog: &MessageCatalog,
) -> Vec<Violation> {
    let mut failures = Vec::new();

    for rule in &field_rules.rules {
        if rule.is_store_backed() || *rule == Rule::Required {
            continue;
        }

        if !passes(rule, value, field_rules.expects_integer()) {
            failures.push(violation(catalog, field_rules.field, rule.clone()));
            if rule.is_type_check() {
                break;
            }
        }
    }

    failures
}

fn passes(rule: &Rule, value: &Value, numeric: bool) -> bool {
    match rule {
        Rule::String => value.is_string(),
        Rule::Integer => parse_integer(value).is_some(),
        Rule::Email => value.as_str().is_some_and(|text| text.validate_email()),
        Rule::Min(limit) => size(value, numeric).is_some_and(|size| size >= *limit as i128),
        Rule::Max(limit) => size(value, numeric).is_some_and(|size| size <= *limit as i128),
        // 빈 값 검사와 저장소 조회 단계에서 평가
        Rule::Required | Rule::Exists { .. } | Rule::Unique { .. } => true,
    }
}

/// 정수 필드는 값 자체, 문자열은 문자 수
fn size(value: &Value, numeric: bool) -> Option<i128> {
    if numeric {
        return parse_integer(value).map(i128::from);
    }
    value.as_str().map(|text| text.chars().count() as i128)
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        _ => false,
    }
}

/// 정수 필드는 문자열로 들어와도 숫자로 조회합니다.
fn lookup_value(field_rules: &FieldRules, value: &Value) -> Value {
    match (field_rules.expects_integer(), parse_integer(value)) {
        (true, Some(number)) => Value::from(number),
        _ => value.clone(),
    }
}

fn violation(catalog: &MessageCatalog, field: &'static str, rule: Rule) -> Violation {
    Violation {
        message: catalog.render(field, &rule),
        field,
        rule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::rules::{identifier_rules, user_payload_rules, RuleKind};
    use serde_json::json;
    use std::sync::Mutex;

    /// 고정된 (컬럼, 값, 식별자) 레코드를 가진 조회기
    struct FixedLookup {
        records: Vec<(&'static str, Value, i64)>,
        calls: Mutex<usize>,
    }

    impl FixedLookup {
        fn new(records: Vec<(&'static str, Value, i64)>) -> Self {
            Self { records, calls: Mutex::new(0) }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl RecordLookup for FixedLookup {
        async fn record_exists(
            &self,
            column: &str,
            value: &Value,
            except_id: Option<i64>,
        ) -> AppResult<bool> {
            *self.calls.lock().unwrap() += 1;
            Ok(self.records.iter().any(|(c, v, id)| {
                *c == column && v == value && Some(*id) != except_id
            }))
        }
    }

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("object")
    }

    fn kinds(violations: &[Violation]) -> Vec<(&'static str, RuleKind)> {
        violations.iter().map(|v| (v.field, v.rule.kind())).collect()
    }

    #[actix_web::test]
    async fn test_missing_fields_fail_required_only() {
        let lookup = FixedLookup::new(vec![]);
        let violations = evaluate(
            &user_payload_rules(true, None),
            &object(json!({})),
            &MessageCatalog::default(),
            &lookup,
        )
        .await
        .unwrap();

        assert_eq!(
            kinds(&violations),
            vec![
                ("name", RuleKind::Required),
                ("email", RuleKind::Required),
                ("password", RuleKind::Required),
            ]
        );
        assert_eq!(lookup.calls(), 0);
    }

    #[actix_web::test]
    async fn test_absent_optional_fields_are_skipped() {
        let lookup = FixedLookup::new(vec![]);
        let violations = evaluate(
            &user_payload_rules(false, Some(1)),
            &object(json!({ "name": "Bob", "email": null })),
            &MessageCatalog::default(),
            &lookup,
        )
        .await
        .unwrap();

        assert!(violations.is_empty());
        assert_eq!(lookup.calls(), 0);
    }

    #[actix_web::test]
    async fn test_present_empty_string_on_update_is_validated() {
        let lookup = FixedLookup::new(vec![]);
        let violations = evaluate(
            &user_payload_rules(false, Some(1)),
            &object(json!({ "name": "" })),
            &MessageCatalog::default(),
            &lookup,
        )
        .await
        .unwrap();

        assert_eq!(kinds(&violations), vec![("name", RuleKind::Min)]);
    }

    #[actix_web::test]
    async fn test_email_syntax_and_length() {
        let lookup = FixedLookup::new(vec![]);
        let rules = user_payload_rules(false, None);
        let catalog = MessageCatalog::default();

        let ok = evaluate(&rules, &object(json!({ "email": "a@b.co" })), &catalog, &lookup)
            .await
            .unwrap();
        assert!(ok.is_empty());

        let bad = evaluate(&rules, &object(json!({ "email": "ab" })), &catalog, &lookup)
            .await
            .unwrap();
        assert_eq!(
            kinds(&bad),
            vec![("email", RuleKind::Email), ("email", RuleKind::Min)]
        );
    }

    #[actix_web::test]
    async fn test_store_rules_skipped_after_local_failure() {
        let lookup = FixedLookup::new(vec![("email", json!("taken"), 1)]);
        let violations = evaluate(
            &user_payload_rules(false, None),
            &object(json!({ "email": "taken" })),
            &MessageCatalog::default(),
            &lookup,
        )
        .await
        .unwrap();

        assert!(!violations.iter().any(|v| v.rule.kind() == RuleKind::Unique));
        assert_eq!(lookup.calls(), 0);
    }

    #[actix_web::test]
    async fn test_unique_ignores_own_record() {
        let lookup = FixedLookup::new(vec![("email", json!("dup@test.com"), 7)]);
        let catalog = MessageCatalog::default();
        let input = object(json!({ "email": "dup@test.com" }));

        let own = evaluate(&user_payload_rules(false, Some(7)), &input, &catalog, &lookup)
            .await
            .unwrap();
        assert!(own.is_empty());

        let other = evaluate(&user_payload_rules(false, Some(8)), &input, &catalog, &lookup)
            .await
            .unwrap();
        assert_eq!(kinds(&other), vec![("email", RuleKind::Unique)]);
    }

    #[actix_web::test]
    async fn test_non_string_value_stops_at_type_rule() {
        let lookup = FixedLookup::new(vec![]);
        let violations = evaluate(
            &user_payload_rules(true, None),
            &object(json!({ "name": 12345, "email": "a@b.co", "password": "123456" })),
            &MessageCatalog::default(),
            &lookup,
        )
        .await
        .unwrap();

        assert_eq!(kinds(&violations), vec![("name", RuleKind::String)]);
    }

    #[actix_web::test]
    async fn test_identifier_string_is_looked_up_as_number() {
        let lookup = FixedLookup::new(vec![("id", json!(42), 42)]);
        let catalog = MessageCatalog::default();

        let found = evaluate(&identifier_rules(), &object(json!({ "id": "42" })), &catalog, &lookup)
            .await
            .unwrap();
        assert!(found.is_empty());

        let missing = evaluate(&identifier_rules(), &object(json!({ "id": "43" })), &catalog, &lookup)
            .await
            .unwrap();
        assert_eq!(kinds(&missing), vec![("id", RuleKind::Exists)]);

        let not_integer = evaluate(&identifier_rules(), &object(json!({ "id": "abc" })), &catalog, &lookup)
            .await
            .unwrap();
        assert_eq!(kinds(&not_integer), vec![("id", RuleKind::Integer)]);
    }

    #[actix_web::test]
    async fn test_password_length_bounds() {
        let lookup = FixedLookup::new(vec![]);
        let rules = user_payload_rules(false, None);
        let catalog = MessageCatalog::default();

        let short = evaluate(&rules, &object(json!({ "password": "12345" })), &catalog, &lookup)
            .await
            .unwrap();
        assert_eq!(kinds(&short), vec![("password", RuleKind::Min)]);

        let ok = evaluate(&rules, &object(json!({ "password": "123456" })), &catalog, &lookup)
            .await
            .unwrap();
        assert!(ok.is_empty());

        let long = evaluate(&rules, &object(json!({ "password": "x".repeat(33) })), &catalog, &lookup)
            .await
            .unwrap();
        assert_eq!(kinds(&long), vec![("password", RuleKind::Max)]);
    }

    #[actix_web::test]
    async fn test_length_counts_characters() {
        let lookup = FixedLookup::new(vec![]);
        let violations = evaluate(
            &user_payload_rules(false, None),
            &object(json!({ "name": "홍길" })),
            &MessageCatalog::default(),
            &lookup,
        )
        .await
        .unwrap();

        assert!(violations.is_empty());
    }

    async fn check(rules: &RuleSet, input: Value) -> Vec<(&'static str, RuleKind)> {
        let lookup = FixedLookup::new(vec![]);
        let violations = evaluate(rules, &object(input), &MessageCatalog::default(), &lookup)
            .await
            .unwrap();
        kinds(&violations)
    }

    /// `local@domain` 형태로 정확히 `len`자인 유효한 이메일 (DNS 라벨 63자 이하)
    fn email_of_length(len: usize) -> String {
        let local = "a".repeat(64);
        let mut labels = Vec::new();
        let mut remaining = len - local.len() - 1;
        while remaining > 63 {
            labels.push("b".repeat(63));
            remaining -= 64;
        }
        labels.push("c".repeat(remaining));

        let email = format!("{}@{}", local, labels.join("."));
        assert_eq!(email.chars().count(), len);
        email
    }

    #[actix_web::test]
    async fn test_name_length_bounds() {
        let rules = user_payload_rules(false, None);

        assert!(check(&rules, json!({ "name": "a".repeat(50) })).await.is_empty());
        assert_eq!(
            check(&rules, json!({ "name": "a".repeat(51) })).await,
            vec![("name", RuleKind::Max)]
        );
        assert!(check(&rules, json!({ "name": "ab" })).await.is_empty());
        assert_eq!(
            check(&rules, json!({ "name": "a" })).await,
            vec![("name", RuleKind::Min)]
        );
    }

    #[actix_web::test]
    async fn test_email_length_bounds() {
        let rules = user_payload_rules(false, None);

        assert!(check(&rules, json!({ "email": "a@b.c" })).await.is_empty());
        assert_eq!(
            check(&rules, json!({ "email": "a@bc" })).await,
            vec![("email", RuleKind::Min)]
        );
        assert!(check(&rules, json!({ "email": email_of_length(255) })).await.is_empty());
        assert_eq!(
            check(&rules, json!({ "email": email_of_length(256) })).await,
            vec![("email", RuleKind::Max)]
        );
    }

    #[actix_web::test]
    async fn test_whitespace_required_field_reports_required_once() {
        let rules = user_payload_rules(true, None);
        let violations = check(
            &rules,
            json!({ "name": "   ", "email": "a@b.co", "password": "123456" }),
        )
        .await;

        assert_eq!(violations, vec![("name", RuleKind::Required)]);
    }
}
