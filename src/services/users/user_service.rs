//! # 사용자 관리 서비스 구현
//!
//! 사용자 리소스의 CRUD 흐름을 담당합니다. 모든 쓰기/조회 경로는
//! 검증 게이트를 먼저 통과해야 하며, 게이트가 거부하면 저장소는 호출되지 않습니다.
//!
//! ```text
//! 요청 본문 / 경로 식별자
//!         │
//!         ▼
//! ┌──────────────────┐   실패   ┌────────────────────────┐
//! │  ValidationGate  │ ───────▶ │ AppError::ValidationError │ → 400
//! └──────────────────┘          └────────────────────────┘
//!         │ 통과
//!         ▼
//! ┌──────────────────┐
//! │  bcrypt 해싱     │  (비밀번호가 있는 경우)
//! └──────────────────┘
//!         │
//!         ▼
//! ┌──────────────────┐
//! │  UserRepository  │
//! └──────────────────┘
//! ```
//!
//! ## 보안
//!
//! - **bcrypt 해싱**: 환경별 cost ([`PasswordConfig::bcrypt_cost`])
//! - **민감 정보 제거**: 응답 DTO에는 비밀번호 해시가 포함되지 않음

use std::sync::Arc;
use std::time::Instant;
use bcrypt::hash;
use serde_json::{Map, Value};
use crate::{
    config::PasswordConfig,
    core::errors::{AppError, AppResult, ErrorContext},
    domain::{
        dto::{users::{UserPayload, UserResponse}, Page},
        entities::users::{NewUser, UserChanges},
    },
    repositories::users::UserRepository,
    validation::ValidationGate,
};

/// 게이트를 통과한 레코드가 저장소 호출 시점에 사라진 경우
const VANISHED_MESSAGE: &str = "검증 이후 사용자 레코드가 사라졌습니다";

/// 사용자 관리 비즈니스 로직 서비스
///
/// 핸들러에는 `web::Data<UserService>`로 주입됩니다.
///
/// ```rust,ignore
/// let repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(database));
/// let service = UserService::new(repo);
///
/// let created = service.create_user(&body).await?;
/// let page = service.list_users(1, 50).await?;
/// ```
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    gate: ValidationGate,
    bcrypt_cost: u32,
}

impl UserService {
    /// 환경 설정의 bcrypt cost를 사용하는 서비스를 생성합니다.
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self::with_bcrypt_cost(repo, PasswordConfig::bcrypt_cost())
    }

    pub fn with_bcrypt_cost(repo: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        Self {
            repo,
            gate: ValidationGate::default(),
            bcrypt_cost,
        }
    }

    /// 검증 게이트를 교체합니다. (메시지 카탈로그 커스터마이즈 용도)
    pub fn with_gate(mut self, gate: ValidationGate) -> Self {
        self.gate = gate;
        self
    }

    /// 사용자 목록 페이지 조회
    pub async fn list_users(&self, page: u64, per_page: u64) -> AppResult<Page<UserResponse>> {
        let page = self.repo.paginate(page, per_page).await?;
        Ok(page.map(UserResponse::from))
    }

    /// 새 사용자 생성
    ///
    /// # 처리 과정
    ///
    /// 1. 모든 필드 필수로 본문 검증 (이메일 중복 포함)
    /// 2. 비밀번호 해싱
    /// 3. 저장 (식별자는 저장소가 할당)
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::ValidationError)` - 검증 실패, 저장소 미호출
    /// * `Err(AppError::InternalError)` - 해싱 실패
    /// * `Err(AppError::DatabaseError)` - 저장 실패 (동시 생성으로 인한 유니크 인덱스 위반 포함)
    pub async fn create_user(&self, body: &Map<String, Value>) -> AppResult<UserResponse> {
        let start_time = Instant::now();

        let payload = self
            .gate
            .validate_user_payload(body, true, None, self.repo.as_ref())
            .await?;

        let UserPayload { name, email, password } = payload;
        let (Some(name), Some(email), Some(password)) = (name, email, password) else {
            return Err(AppError::InternalError("검증된 생성 요청에 필드가 누락되었습니다".to_string()));
        };

        let new_user = NewUser {
            name,
            email,
            password_hash: self.hash_password(&password)?,
        };
        let created = self.repo.create(new_user).await?;

        log::info!("사용자 생성: id={} ({:?})", created.id, start_time.elapsed());
        Ok(UserResponse::from(created))
    }

    /// 단일 사용자 조회
    pub async fn get_user(&self, raw_id: &str) -> AppResult<UserResponse> {
        let id = self.gate.validate_identifier(raw_id, self.repo.as_ref()).await?;
        self.get_existing(id).await
    }

    /// 게이트가 존재를 확인한 레코드를 읽습니다.
    async fn get_existing(&self, id: i64) -> AppResult<UserResponse> {
        let user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("{}: id={}", VANISHED_MESSAGE, id)))?;

        Ok(UserResponse::from(user))
    }

    /// 사용자 부분 수정
    ///
    /// 본문에 있는 필드만 검증하고 교체합니다. 자기 자신의 이메일을 다시 보내는 것은 허용됩니다.
    /// 변경할 필드가 없으면 저장소에 쓰지 않고 현재 레코드를 반환합니다.
    pub async fn update_user(&self, raw_id: &str, body: &Map<String, Value>) -> AppResult<UserResponse> {
        let id = self.gate.validate_identifier(raw_id, self.repo.as_ref()).await?;
        let payload = self
            .gate
            .validate_user_payload(body, false, Some(id), self.repo.as_ref())
            .await?;

        let changes = UserChanges {
            name: payload.name,
            email: payload.email,
            password_hash: payload
                .password
                .map(|password| self.hash_password(&password))
                .transpose()?,
        };

        if changes.is_empty() {
            return self.get_existing(id).await;
        }

        let updated = self
            .repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::InternalError(format!("{}: id={}", VANISHED_MESSAGE, id)))?;

        log::info!("사용자 수정: id={}", id);
        Ok(UserResponse::from(updated))
    }

    /// 사용자 삭제 (물리 삭제)
    pub async fn delete_user(&self, raw_id: &str) -> AppResult<()> {
        let id = self.gate.validate_identifier(raw_id, self.repo.as_ref()).await?;

        if !self.repo.delete(id).await? {
            return Err(AppError::InternalError(format!("{}: id={}", VANISHED_MESSAGE, id)));
        }

        log::info!("사용자 삭제: id={}", id);
        Ok(())
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        let hash_start = Instant::now();
        let password_hash = hash(password, self.bcrypt_cost).context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(password_hash)
    }
}
