//! # 사용자 관련 응답 DTO 모듈
//!
//! 엔티티를 클라이언트에 노출 가능한 형태로 변환합니다.
//! 비밀번호 해시 같은 민감한 필드는 응답 DTO에 존재하지 않으므로
//! 직렬화 경로에서 실수로 노출될 수 없습니다.
//!
//! ```rust,ignore
//! let response = UserResponse::from(user);
//! Ok(HttpResponse::Ok().json(response))
//! ```

pub mod user_response;

pub use user_response::UserResponse;
