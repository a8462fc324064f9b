//! 사용자 관리 서비스 모듈
//!
//! 사용자 리소스의 목록/생성/조회/수정/삭제 비즈니스 로직을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일 중복 방지 (검증 게이트 + 유니크 인덱스)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(repo);
//! let response = user_service.create_user(&body).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
