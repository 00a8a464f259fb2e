//! 사용자 등록 서비스 백엔드
//!
//! 후보 사용자 레코드를 검증하고, 이메일을 정규화하고, 기존 사용자와의 중복을
//! 확인한 뒤, 사용자 타입별 보너스를 적용하여 컬렉션에 추가합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 호출 직렬화
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증 → 정규화 → 중복 검사 → 보너스 → 저장
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore (추가/열거)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_registry_backend::domain::dto::users::request::CreateUserRequest;
//! use user_registry_backend::repositories::users::InMemoryUserRepository;
//! use user_registry_backend::services::users::UserRegistrar;
//!
//! let mut registrar = UserRegistrar::new(InMemoryUserRepository::new());
//! let result = registrar.create_user(CreateUserRequest::new(
//!     Some("Mike"),
//!     Some("mike+1@gmail.com"),
//!     Some("Av. Juan G"),
//!     Some("+349 1122354215"),
//!     Some("Normal"),
//!     Some("124"),
//! ));
//! assert_eq!(result.errors, "User Created");
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
