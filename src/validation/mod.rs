//! # Validation Module
//!
//! 요청 입력을 저장소에 도달하기 전에 걸러내는 검증 계층입니다.
//!
//! - [`rules`] - 선언적 규칙과 사용자 리소스의 규칙 테이블
//! - [`messages`] - 규칙 종류별 메시지 카탈로그
//! - [`engine`] - 규칙 평가기와 저장소 조회 추상화 [`RecordLookup`]
//! - [`gate`] - 핸들러/서비스가 호출하는 [`ValidationGate`]

pub mod rules;
pub mod messages;
pub mod engine;
pub mod gate;

pub use engine::{RecordLookup, Violation};
pub use gate::ValidationGate;
pub use messages::MessageCatalog;
