//! # Core Module
//!
//! 애플리케이션 전역에서 사용하는 공통 기능을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 구현, 모든 에러는 `{"errors": [...]}`로 응답
//! - **자동 변환**: thiserror 기반 에러 정의, [`ErrorContext`]로 외부 에러 매핑

pub mod errors;

pub use errors::*;
