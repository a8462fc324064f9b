//! 테스트용 인메모리 사용자 리포지토리
//!
//! 쓰기 호출 횟수를 기록하여, 검증 실패 시 저장소에 도달하지 않았는지 확인할 수 있습니다.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use serde_json::Value;
use crate::core::errors::AppResult;
use crate::domain::dto::Page;
use crate::domain::entities::users::{NewUser, User, UserChanges};
use crate::validation::RecordLookup;
use super::user_repo::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<BTreeMap<i64, User>>,
    last_id: Mutex<i64>,
    writes: AtomicUsize,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// create/update/delete 호출 횟수
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl RecordLookup for InMemoryUserRepository {
    async fn record_exists(
        &self,
        column: &str,
        value: &Value,
        except_id: Option<i64>,
    ) -> AppResult<bool> {
        let users = self.users.lock().unwrap();
        let matches = |user: &&User| match column {
            "id" => value.as_i64() == Some(user.id),
            "email" => value.as_str() == Some(user.email.as_str()),
            _ => false,
        };

        Ok(users
            .values()
            .filter(|user| Some(user.id) != except_id)
            .any(|user| matches(&user)))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn paginate(&self, page: u64, per_page: u64) -> AppResult<Page<User>> {
        let users = self.users.lock().unwrap();
        let data = users
            .values()
            .skip(Page::<User>::offset(page, per_page) as usize)
            .take(per_page as usize)
            .cloned()
            .collect();

        Ok(Page::new(data, page, per_page, users.len() as u64))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        self.record_write();

        let mut last_id = self.last_id.lock().unwrap();
        *last_id += 1;

        let user = User::from_new(*last_id, new_user);
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, id: i64, changes: UserChanges) -> AppResult<Option<User>> {
        self.record_write();

        let mut users = self.users.lock().unwrap();
        Ok(users.get_mut(&id).map(|user| {
            user.apply(changes);
            user.clone()
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        self.record_write();
        Ok(self.users.lock().unwrap().remove(&id).is_some())
    }
}
