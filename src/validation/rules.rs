//! 선언적 검증 규칙
//!
//! 각 필드의 규칙은 [`Rule`] 값의 목록으로 표현되며, 규칙 자체가 파라미터
//! (최소/최대 길이, 조회할 컬럼 등)를 가집니다. 규칙 테이블은 데이터일 뿐이고
//! 실제 평가는 [`engine`](super::engine)이 담당합니다.

use serde_json::Value;

/// 이름 길이 제한 (문자 수)
pub const NAME_LENGTH: (usize, usize) = (2, 50);
/// 이메일 길이 제한 (문자 수)
pub const EMAIL_LENGTH: (usize, usize) = (5, 255);
/// 비밀번호 길이 제한 (문자 수)
pub const PASSWORD_LENGTH: (usize, usize) = (6, 32);

/// 경로 파라미터로 받은 식별자의 필드명
pub const ID_FIELD: &str = "id";

/// 단일 검증 규칙
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// 값이 존재하고 비어 있지 않아야 함
    Required,
    /// 문자열이어야 함
    String,
    /// 정수로 해석 가능해야 함 (JSON 정수 또는 정수 문자열)
    Integer,
    /// 이메일 형식이어야 함
    Email,
    /// 최소 길이 (문자열은 문자 수, 정수는 값)
    Min(usize),
    /// 최대 길이 (문자열은 문자 수, 정수는 값)
    Max(usize),
    /// 저장소에 해당 컬럼 값을 가진 레코드가 있어야 함
    Exists { column: &'static str },
    /// 저장소에 해당 컬럼 값을 가진 다른 레코드가 없어야 함
    Unique {
        column: &'static str,
        ignore_id: Option<i64>,
    },
}

/// 메시지 카탈로그의 키가 되는 규칙 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Required,
    String,
    Integer,
    Email,
    Min,
    Max,
    Exists,
    Unique,
}

impl Rule {
    pub fn kind(&self) -> RuleKind {
        match self {
            Rule::Required => RuleKind::Required,
            Rule::String => RuleKind::String,
            Rule::Integer => RuleKind::Integer,
            Rule::Email => RuleKind::Email,
            Rule::Min(_) => RuleKind::Min,
            Rule::Max(_) => RuleKind::Max,
            Rule::Exists { .. } => RuleKind::Exists,
            Rule::Unique { .. } => RuleKind::Unique,
        }
    }

    /// 저장된 상태를 조회해야 평가할 수 있는 규칙인지
    pub fn is_store_backed(&self) -> bool {
        matches!(self, Rule::Exists { .. } | Rule::Unique { .. })
    }

    /// 실패 시 같은 필드의 나머지 규칙 평가를 중단하는 타입 규칙인지
    pub fn is_type_check(&self) -> bool {
        matches!(self, Rule::String | Rule::Integer)
    }

    /// `Min`/`Max` 규칙의 한계값
    pub fn limit(&self) -> Option<usize> {
        match self {
            Rule::Min(limit) | Rule::Max(limit) => Some(*limit),
            _ => None,
        }
    }
}

/// 한 필드에 적용되는 규칙 목록
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRules {
    pub field: &'static str,
    pub rules: Vec<Rule>,
}

impl FieldRules {
    pub fn is_required(&self) -> bool {
        self.rules.contains(&Rule::Required)
    }

    pub fn expects_integer(&self) -> bool {
        self.rules.contains(&Rule::Integer)
    }
}

/// 필드 선언 순서를 유지하는 규칙 집합
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    fields: Vec<FieldRules>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 필드 규칙을 추가합니다.
    pub fn field(mut self, field: &'static str, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push(FieldRules {
            field,
            rules: rules.into_iter().collect(),
        });
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldRules> {
        self.fields.iter()
    }
}

/// `required|integer|exists:users,id`
pub fn identifier_rules() -> RuleSet {
    RuleSet::new().field(
        ID_FIELD,
        [Rule::Required, Rule::Integer, Rule::Exists { column: ID_FIELD }],
    )
}

/// 사용자 본문 규칙
///
/// * `require_all` - 생성은 `true`, 부분 수정은 `false`
/// * `ignore_id` - 이메일 중복 검사에서 제외할 레코드 (수정 대상 자신)
pub fn user_payload_rules(require_all: bool, ignore_id: Option<i64>) -> RuleSet {
    let required = || require_all.then_some(Rule::Required);

    RuleSet::new()
        .field(
            "name",
            required().into_iter().chain([
                Rule::String,
                Rule::Min(NAME_LENGTH.0),
                Rule::Max(NAME_LENGTH.1),
            ]),
        )
        .field(
            "email",
            required().into_iter().chain([
                Rule::String,
                Rule::Email,
                Rule::Min(EMAIL_LENGTH.0),
                Rule::Max(EMAIL_LENGTH.1),
                Rule::Unique {
                    column: "email",
                    ignore_id,
                },
            ]),
        )
        .field(
            "password",
            required().into_iter().chain([
                Rule::String,
                Rule::Min(PASSWORD_LENGTH.0),
                Rule::Max(PASSWORD_LENGTH.1),
            ]),
        )
}

/// JSON 정수 또는 앞뒤 공백을 허용하는 정수 문자열을 `i64`로 해석합니다.
pub fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.trim().parse::<i64>().ok(),
        _ => None,
    }
}
