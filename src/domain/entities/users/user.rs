//! User Entity Implementation
//!
//! `users` 컬렉션 문서와 1:1로 매핑되는 사용자 엔티티입니다.
//! 식별자는 저장소가 시퀀스로 할당하는 양의 정수이며,
//! 비밀번호는 bcrypt 해시로만 보관됩니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// 저장소가 할당한 고유 식별자
    #[serde(rename = "_id")]
    pub id: i64,
    /// 사용자 이름 (2-50자)
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 솔트가 포함된 bcrypt 해시. 평문 비밀번호는 어디에도 저장되지 않습니다.
    pub password_hash: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새로 할당된 식별자로 사용자 엔티티를 생성합니다.
    pub fn from_new(id: i64, new_user: NewUser) -> Self {
        let now = DateTime::now();

        Self {
            id,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// 부분 변경 사항을 적용하고 `updated_at`을 갱신합니다.
    pub fn apply(&mut self, changes: UserChanges) {
        let UserChanges {
            name,
            email,
            password_hash,
        } = changes;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(password_hash) = password_hash {
            self.password_hash = password_hash;
        }

        self.updated_at = DateTime::now();
    }
}

/// 아직 식별자가 할당되지 않은 신규 사용자
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// 업데이트 시 교체할 필드들. `None`인 필드는 변경하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

impl UserChanges {
    /// 변경할 필드가 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password_hash.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::from_new(
            7,
            NewUser {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                password_hash: "$2b$04$hash".to_string(),
            },
        )
    }

    #[test]
    fn test_from_new_sets_identifier_and_timestamps() {
        let user = sample_user();

        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Alice");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_apply_replaces_only_present_fields() {
        let mut user = sample_user();

        user.apply(UserChanges {
            name: Some("Alicia".to_string()),
            ..UserChanges::default()
        });

        assert_eq!(user.name, "Alicia");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.password_hash, "$2b$04$hash");
    }

    #[test]
    fn test_changes_is_empty() {
        assert!(UserChanges::default().is_empty());
        assert!(!UserChanges {
            email: Some("a@b.co".to_string()),
            ..UserChanges::default()
        }
        .is_empty());
    }

    #[test]
    fn test_bson_document_uses_integer_id() {
        let document = mongodb::bson::to_document(&sample_user()).expect("serializable");

        assert_eq!(document.get_i64("_id").ok(), Some(7));
        assert!(document.get("password_hash").is_some());
    }
}
