//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 요청 본문을 JSON 객체로 디코딩하고,
//! 검증 게이트 통과 후 구조화된 [`UserPayload`]로 변환합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: 본문이 JSON 객체인지 확인 ([`parse_json_object`])
//! 2. **규칙 검증**: 필수 여부, 길이, 이메일 형식, 중복 여부 (`validation` 모듈)
//! 3. **변환**: 통과한 객체에서 알려진 필드만 추출 ([`UserPayload::from_object`])

pub mod user_payload;

pub use user_payload::{parse_json_object, UserPayload};
