//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하며, 서비스 계층은 트레이트 객체(`Arc<dyn UserRepository>`)로
//! 리포지토리에 접근합니다. 테스트에서는 인메모리 구현으로 교체됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MongoUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(database));
//! let page = repo.paginate(1, 50).await?;
//! ```

pub mod users;
