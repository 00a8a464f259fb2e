//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (User, UserType)
//! └── dto/          ← 데이터 전송 객체
//! ```

pub mod users;

pub use users::*;
