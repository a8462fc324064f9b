//! # Configuration Module
//!
//! 서비스 설정값을 환경 변수 기반으로 중앙집중식 관리하는 모듈입니다.
//! `.env.dev` / `.env.prod` 파일은 `main`에서 `PROFILE`에 따라 먼저 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 환경, 서버, 데이터베이스, 해싱, Rate Limiting, 페이지네이션 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_crud_dev"
//!
//! # 환경 및 보안
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # 검증 메시지 언어
//! export VALIDATION_LOCALE="ko"      # ko, pt
//! ```

pub mod data_config;

pub use data_config::*;
