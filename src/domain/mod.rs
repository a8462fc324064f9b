//! # Domain Module
//!
//! 사용자 리소스의 엔티티와 데이터 전송 객체를 담는 도메인 계층입니다.

pub mod entities;
pub mod dto;
