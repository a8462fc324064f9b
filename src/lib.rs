//! 사용자 CRUD 서비스
//!
//! 단일 사용자 리소스의 목록/생성/조회/수정/삭제 API와,
//! 모든 입력이 저장소에 닿기 전에 통과해야 하는 검증 게이트를 제공합니다.
//!
//! # Features
//!
//! - **사용자 CRUD**: 페이지 목록, 생성, 조회, 부분 수정, 물리 삭제
//! - **검증 게이트**: 선언적 규칙 + 메시지 카탈로그, 실패 시 `400 {"errors": [...]}`
//! - **bcrypt**: 비밀번호는 해시로만 저장되고 응답에 포함되지 않음
//! - **MongoDB**: 정수 시퀀스 식별자와 이메일 유니크 인덱스
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │    Services     │ ──▶ │ Validation Gate │
//! └─────────────────┘     └─────────────────┘
//!          │                       │ RecordLookup
//!          ▼                       ▼
//! ┌─────────────────────────────────────────┐
//! │              Repositories               │ ← 데이터 액세스
//! └─────────────────────────────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_crud_service::repositories::users::{MongoUserRepository, UserRepository};
//! use user_crud_service::services::users::UserService;
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(database));
//! let service = UserService::new(repo);
//! let created = service.create_user(&body).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod validation;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
