//! # User Data Transfer Objects Module
//!
//! 사용자 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! ```text
//! users/
//! ├── request/                    # 클라이언트 → 서버
//! │   └── user_payload.rs        # 본문 디코딩, 검증 후 사용자 입력
//! └── response/                   # 서버 → 클라이언트
//!     └── user_response.rs       # 비밀번호 해시를 제외한 사용자 정보
//! ```

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
