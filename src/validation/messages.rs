//! 규칙 종류별 메시지 카탈로그
//!
//! 메시지 템플릿은 문자열 치환이 아니라 `fn(필드명, 규칙) -> String` 포매터로
//! 표현됩니다. 규칙 파라미터(최소/최대 길이)는 [`Rule`]에서 직접 읽습니다.
//!
//! 기본 카탈로그는 한국어이며, 기존 API 클라이언트를 위해 포르투갈어 카탈로그를
//! 함께 제공합니다. 언어는 `VALIDATION_LOCALE` 설정으로 선택합니다.

use std::collections::HashMap;
use super::rules::{Rule, RuleKind};

/// 요청 본문이 JSON 객체가 아닐 때의 메시지
pub const MALFORMED_BODY_MESSAGE: &str = "요청 본문은 JSON 객체여야 합니다.";

/// 필드명과 규칙으로 사용자 메시지를 만드는 포매터
pub type MessageFormatter = fn(field: &str, rule: &Rule) -> String;

mod ko {
    use super::Rule;

    pub fn required(field: &str, _: &Rule) -> String {
        format!("'{}' 속성이 누락되었습니다.", field)
    }

    pub fn string(field: &str, _: &Rule) -> String {
        format!("'{}' 속성은 문자열이어야 합니다.", field)
    }

    pub fn integer(field: &str, _: &Rule) -> String {
        format!("'{}' 속성은 정수여야 합니다.", field)
    }

    pub fn email(field: &str, _: &Rule) -> String {
        format!("'{}' 속성이 유효한 이메일 주소가 아닙니다.", field)
    }

    pub fn min(field: &str, rule: &Rule) -> String {
        format!(
            "'{}' 속성은 최소 {}자 이상이어야 합니다.",
            field,
            rule.limit().unwrap_or_default()
        )
    }

    pub fn max(field: &str, rule: &Rule) -> String {
        format!(
            "'{}' 속성은 최대 {}자까지 허용됩니다.",
            field,
            rule.limit().unwrap_or_default()
        )
    }

    pub fn exists(field: &str, _: &Rule) -> String {
        format!("입력한 '{}'이(가) 데이터베이스에 존재하지 않습니다.", field)
    }

    pub fn unique(field: &str, _: &Rule) -> String {
        format!("입력한 '{}' 속성은 이미 사용 중입니다.", field)
    }
}

mod pt {
    use super::Rule;

    pub fn required(field: &str, _: &Rule) -> String {
        format!("Está faltando o atributo '{}'.", field)
    }

    pub fn string(field: &str, _: &Rule) -> String {
        format!("O atributo '{}' deve ser do tipo texto.", field)
    }

    pub fn integer(field: &str, _: &Rule) -> String {
        format!("O atributo '{}' deve ser do tipo numérico inteiro.", field)
    }

    pub fn email(field: &str, _: &Rule) -> String {
        format!("O atributo '{}' informado não é válido.", field)
    }

    pub fn min(field: &str, rule: &Rule) -> String {
        format!(
            "O atributo '{}' deve ter no mínimo {} caracteres.",
            field,
            rule.limit().unwrap_or_default()
        )
    }

    pub fn max(field: &str, rule: &Rule) -> String {
        format!(
            "O atributo '{}' deve ter no máximo {} caracteres.",
            field,
            rule.limit().unwrap_or_default()
        )
    }

    pub fn exists(field: &str, _: &Rule) -> String {
        format!("O {} informado não existe no banco de dados.", field)
    }

    pub fn unique(field: &str, _: &Rule) -> String {
        format!("O atributo '{}' informado já está sendo usado.", field)
    }
}

/// 규칙 종류 → 메시지 포매터 매핑
///
/// # 예제
///
/// ```rust,ignore
/// let catalog = MessageCatalog::default()
///     .with(RuleKind::Unique, |field, _| format!("{field} is already taken"));
///
/// assert_eq!(catalog.render("email", &unique_rule), "email is already taken");
/// ```
#[derive(Clone)]
pub struct MessageCatalog {
    formatters: HashMap<RuleKind, MessageFormatter>,
}

impl MessageCatalog {
    fn from_formatters(formatters: [(RuleKind, MessageFormatter); 8]) -> Self {
        Self {
            formatters: HashMap::from(formatters),
        }
    }

    /// 기본 한국어 메시지 카탈로그
    pub fn korean() -> Self {
        Self::from_formatters([
            (RuleKind::Required, ko::required),
            (RuleKind::String, ko::string),
            (RuleKind::Integer, ko::integer),
            (RuleKind::Email, ko::email),
            (RuleKind::Min, ko::min),
            (RuleKind::Max, ko::max),
            (RuleKind::Exists, ko::exists),
            (RuleKind::Unique, ko::unique),
        ])
    }

    /// 포르투갈어 메시지 카탈로그
    pub fn portuguese() -> Self {
        Self::from_formatters([
            (RuleKind::Required, pt::required),
            (RuleKind::String, pt::string),
            (RuleKind::Integer, pt::integer),
            (RuleKind::Email, pt::email),
            (RuleKind::Min, pt::min),
            (RuleKind::Max, pt::max),
            (RuleKind::Exists, pt::exists),
            (RuleKind::Unique, pt::unique),
        ])
    }

    /// 로케일 이름으로 카탈로그를 선택합니다. 알 수 없는 값은 한국어입니다.
    pub fn for_locale(locale: &str) -> Self {
        match locale.trim().to_lowercase().as_str() {
            "pt" | "pt-br" | "pt_br" | "portuguese" => Self::portuguese(),
            _ => Self::korean(),
        }
    }

    /// 특정 규칙 종류의 포매터를 교체합니다.
    pub fn with(mut self, kind: RuleKind, formatter: MessageFormatter) -> Self {
        self.formatters.insert(kind, formatter);
        self
    }

    /// 규칙 위반 메시지를 생성합니다.
    pub fn render(&self, field: &str, rule: &Rule) -> String {
        match self.formatters.get(&rule.kind()) {
            Some(formatter) => formatter(field, rule),
            None => format!("'{}' 속성이 올바르지 않습니다.", field),
        }
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::korean()
    }
}
