use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// RFC 3339 형식 생성 시각
    pub created_at: String,
    /// RFC 3339 형식 수정 시각
    pub updated_at: String,
}

fn rfc3339(value: DateTime) -> String {
    value.try_to_rfc3339_string().unwrap_or_default()
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            name,
            email,
            created_at: rfc3339(created_at),
            updated_at: rfc3339(updated_at),
        }
    }
}
