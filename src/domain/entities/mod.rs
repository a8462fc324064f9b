//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 도메인 엔티티들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (저장되는 엔티티)
//! └── dto/          ← HTTP 요청/응답 데이터 전송 객체
//! ```

pub mod users;

pub use users::*;
