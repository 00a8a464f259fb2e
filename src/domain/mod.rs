//! # Domain Layer Module
//!
//! 사용자 등록 도메인의 엔티티와 데이터 전송 객체(DTO)를 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장되는 사용자 레코드 (User, UserType)
//! └── DTOs      - 원시 입력(CreateUserRequest)과 결과(CreateUserResponse)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories)
//! ```
//!
//! ## 불변 조건
//!
//! 컬렉션에 저장된 `User`의 이메일은 항상 정규화된 형태이고,
//! 금액은 이미 사용자 타입 보너스가 반영된 값입니다.
//! 이 두 값은 등록 이후 다시 변경되지 않습니다.

pub mod entities;
pub mod dto;

pub use entities::*;
pub use dto::*;
