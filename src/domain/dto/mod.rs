//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 주고받기 위한 객체들을 정의합니다.
//!
//! - [`users`] - 사용자 요청 본문 디코딩, 검증 후 입력, 응답
//! - [`pagination`] - 목록 조회의 페이지 응답

pub mod users;
pub mod pagination;

pub use users::*;
pub use pagination::Page;
