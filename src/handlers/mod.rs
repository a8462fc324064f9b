//! HTTP 요청 핸들러 모듈
//!
//! 핸들러는 요청에서 경로/쿼리/본문을 꺼내 서비스에 넘기고, 결과를 상태 코드와 함께
//! JSON 응답으로 돌려주는 역할만 합니다. 에러는 [`AppError`](crate::core::errors::AppError)의
//! `ResponseError` 구현이 응답으로 변환합니다.

pub mod users;
