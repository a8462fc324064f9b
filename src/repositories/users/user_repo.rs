//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//!
//! ## 특징
//!
//! - **트레이트 경계**: 서비스는 [`UserRepository`] 트레이트 객체에만 의존
//! - **정수 식별자**: `counters` 컬렉션의 시퀀스로 `_id` 할당
//! - **검증 조회**: [`RecordLookup`] 구현으로 `exists`/`unique` 규칙 지원
//! - **데이터 무결성**: 이메일 유니크 인덱스 관리

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime, Document},
    options::{CountOptions, FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use serde_json::Value;
use crate::{
    core::errors::{AppError, AppResult, ErrorContext},
    db::Database,
    domain::{
        dto::Page,
        entities::users::{NewUser, User, UserChanges},
    },
    validation::RecordLookup,
};

const USERS_COLLECTION: &str = "users";
const COUNTERS_COLLECTION: &str = "counters";
/// `counters` 컬렉션에서 사용자 시퀀스 문서의 `_id`
const USERS_SEQUENCE: &str = "users";

/// 사용자 저장소 추상화
///
/// 검증 규칙이 저장된 상태를 조회할 수 있도록 [`RecordLookup`]을 상위 트레이트로 가집니다.
#[async_trait]
pub trait UserRepository: RecordLookup {
    /// 식별자 오름차순으로 한 페이지를 조회합니다.
    async fn paginate(&self, page: u64, per_page: u64) -> AppResult<Page<User>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// 새 식별자를 할당하고 사용자를 저장합니다.
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// 부분 변경을 적용합니다. 대상이 없으면 `None`을 반환합니다.
    async fn update(&self, id: i64, changes: UserChanges) -> AppResult<Option<User>>;

    /// 물리 삭제. 삭제된 문서가 없으면 `false`를 반환합니다.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// ## 저장 구조
///
/// - **컬렉션명**: `users`
/// - **인덱스**: email(unique)
/// - **식별자 시퀀스**: `counters` 컬렉션의 `{ _id: "users", seq: <i64> }`
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = MongoUserRepository::new(database.clone());
/// repo.create_indexes().await?;
///
/// let created = repo.create(NewUser { name, email, password_hash }).await?;
/// let found = repo.find_by_id(created.id).await?;
/// ```
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(USERS_COLLECTION)
    }

    fn counters(&self) -> Collection<Document> {
        self.db.get_database().collection::<Document>(COUNTERS_COLLECTION)
    }

    /// 시퀀스를 원자적으로 증가시켜 다음 식별자를 얻습니다.
    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters()
            .find_one_and_update(
                doc! { "_id": USERS_SEQUENCE },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .ok_or_else(|| AppError::DatabaseError("사용자 시퀀스를 증가시키지 못했습니다".to_string()))?;

        counter
            .get_i64("seq")
            .map_err(|e| AppError::DatabaseError(format!("잘못된 시퀀스 문서: {}", e)))
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// 1. **이메일 유니크 인덱스** - 검증 시점 중복 검사와 동시 생성 경합을 함께 막습니다.
    ///
    /// 이미 중복 이메일이 저장되어 있으면 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// 규칙의 컬럼명을 문서 필드명으로 변환합니다.
fn document_field(column: &str) -> &str {
    match column {
        "id" => "_id",
        other => other,
    }
}

#[async_trait]
impl RecordLookup for MongoUserRepository {
    async fn record_exists(
        &self,
        column: &str,
        value: &Value,
        except_id: Option<i64>,
    ) -> AppResult<bool> {
        let value = mongodb::bson::to_bson(value)
            .with_context(|| format!("'{}' 조회 값 변환 실패", column))?;

        let mut filter = Document::new();
        filter.insert(document_field(column), value);
        if let Some(except_id) = except_id {
            filter = doc! { "$and": [filter, { "_id": { "$ne": except_id } }] };
        }

        let count = self
            .collection()
            .count_documents(filter)
            .with_options(CountOptions::builder().limit(1).build())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn paginate(&self, page: u64, per_page: u64) -> AppResult<Page<User>> {
        let collection = self.collection();

        let total = collection
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let options = FindOptions::builder()
            .sort(doc! { "_id": 1 })
            .skip(Page::<User>::offset(page, per_page))
            .limit(per_page as i64)
            .build();

        let users: Vec<User> = collection
            .find(doc! {})
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(Page::new(users, page, per_page, total))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let user = User::from_new(self.next_id().await?, new_user);

        self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(user)
    }

    async fn update(&self, id: i64, changes: UserChanges) -> AppResult<Option<User>> {
        let UserChanges {
            name,
            email,
            password_hash,
        } = changes;

        let mut set = doc! { "updated_at": DateTime::now() };
        if let Some(name) = name {
            set.insert("name", name);
        }
        if let Some(email) = email {
            set.insert("email", email);
        }
        if let Some(password_hash) = password_hash {
            set.insert("password_hash", password_hash);
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_field_maps_identifier() {
        assert_eq!(document_field("id"), "_id");
        assert_eq!(document_field("email"), "email");
    }

    #[test]
    fn test_json_integer_becomes_int64() {
        let value = mongodb::bson::to_bson(&serde_json::json!(42)).unwrap();

        assert_eq!(value, mongodb::bson::Bson::Int64(42));
    }
}
