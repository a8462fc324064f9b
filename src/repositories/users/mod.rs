//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`] 트레이트와 MongoDB 구현체 [`MongoUserRepository`]를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let repo = MongoUserRepository::new(database.clone());
//! let user = repo.find_by_id(42).await?;
//! ```

pub mod user_repo;

#[cfg(test)]
pub mod memory_repo;

pub use user_repo::{MongoUserRepository, UserRepository};

#[cfg(test)]
pub use memory_repo::InMemoryUserRepository;
