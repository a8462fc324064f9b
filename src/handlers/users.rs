//! 사용자 리소스 HTTP 핸들러
//!
//! 요청 본문은 `web::Json`으로 바로 역직렬화하지 않고 원시 바이트로 받아
//! 검증 게이트가 필드별 메시지를 만들 수 있도록 JSON 객체로만 디코딩합니다.
//!
//! | Method | Path | 성공 |
//! |--------|------|------|
//! | GET | `/api/v1/users?page=N` | 200 |
//! | POST | `/api/v1/users` | 201 |
//! | GET | `/api/v1/users/{user_id}` | 200 |
//! | PUT, PATCH | `/api/v1/users/{user_id}` | 200 |
//! | DELETE | `/api/v1/users/{user_id}` | 204 |
//!
//! 검증 실패는 모두 `400 {"errors": [...]}`입니다.

use actix_web::{delete, get, post, route, web, HttpResponse};
use serde::Deserialize;
use crate::config::PaginationConfig;
use crate::core::errors::AppError;
use crate::domain::dto::users::parse_json_object;
use crate::services::users::UserService;

/// 목록 조회 쿼리 파라미터. 잘못된 값은 1페이지로 취급되므로 문자열로 받습니다.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
}

#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, AppError> {
    let page = PaginationConfig::normalize_page(query.page.as_deref());
    let users = service.list_users(page, PaginationConfig::USERS_PER_PAGE).await?;

    Ok(HttpResponse::Ok().json(users))
}

#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let payload = parse_json_object(&body)?;
    let user = service.create_user(&payload).await?;

    Ok(HttpResponse::Created().json(user))
}

#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[route("/{user_id}", method = "PUT", method = "PATCH")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let payload = parse_json_object(&body)?;
    let user = service.update_user(&user_id, &payload).await?;

    Ok(HttpResponse::Ok().json(user))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
