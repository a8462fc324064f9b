//! Users Entity Module
//!
//! 사용자 도메인의 엔티티와 쓰기 모델을 정의합니다.
//!
//! - [`User`](user::User) - 저장된 사용자 문서
//! - [`NewUser`](user::NewUser) - 식별자 할당 전 신규 사용자
//! - [`UserChanges`](user::UserChanges) - 부분 업데이트 변경 집합
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{NewUser, User};
//!
//! let user = User::from_new(1, NewUser {
//!     name: "Alice".to_string(),
//!     email: "alice@example.com".to_string(),
//!     password_hash: hashed_password,
//! });
//! ```

pub mod user;

pub use user::{NewUser, User, UserChanges};
