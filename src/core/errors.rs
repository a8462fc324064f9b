//! # Application Error Handling System
//!
//! 사용자 CRUD 서비스의 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 실패 경로가 동일한 JSON 형식으로 응답되도록 합니다.
//!
//! ## 응답 형식
//!
//! 모든 에러 응답은 다음 형식을 따릅니다:
//!
//! ```json
//! {
//!   "errors": ["사람이 읽을 수 있는 메시지", "..."]
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 검증 게이트 규칙 위반 (형식, 길이, 중복, 존재 여부) |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 연산 실패 |
//! | `InternalError` | 500 Internal Server Error | 해싱 실패, 조회 후 사라진 레코드 등 |
//!
//! 검증 실패는 항상 클라이언트 입력 오류이며, "형식이 잘못된 요청"과
//! "비즈니스 규칙 위반(중복 이메일 등)"을 구분하지 않습니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, ErrorContext};
//!
//! let count = collection.count_documents(filter).await
//!     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
//!
//! let hashed = bcrypt::hash(password, cost)
//!     .context("비밀번호 해싱 실패")?;
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 500 응답에서 클라이언트에게 노출하는 고정 메시지
const INTERNAL_ERROR_MESSAGE: &str = "서버 내부 오류가 발생했습니다.";

/// 애플리케이션 전역 에러 타입
///
/// 클라이언트 오류는 `ValidationError` 하나뿐이며, 나머지 변형은 모두
/// 서버 측 실패로 500 응답이 됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러
    ///
    /// 검증 게이트가 생성한 메시지 목록을 그대로 담습니다.
    /// 400 Bad Request로 응답됩니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// return Err(AppError::ValidationError(vec![
    ///     "'email' 속성은 이미 사용 중입니다.".to_string(),
    /// ]));
    /// ```
    #[error("Validation error: {}", .0.join(", "))]
    ValidationError(Vec<String>),

    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산 중 발생하는 오류입니다. 조회 직후 경쟁 삽입으로 인한
    /// 유니크 인덱스 위반도 여기로 전파됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 단일 메시지로 검증 에러를 생성합니다.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError(vec![message.into()])
    }

    /// 응답 본문의 `errors` 배열에 들어갈 메시지들
    pub fn messages(&self) -> Vec<String> {
        match self {
            AppError::ValidationError(messages) => messages.clone(),
            _ => vec![INTERNAL_ERROR_MESSAGE.to_string()],
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 상세 원인을 서버 로그에만 기록하고,
    /// 클라이언트에는 고정 메시지만 노출합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "errors": self.messages()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let hashed = bcrypt::hash(&password, cost)
///     .context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
