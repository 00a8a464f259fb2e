//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 사용자 등록 파이프라인(검증 → 이메일 정규화 → 중복 검사 → 보너스 계산 → 저장)을 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserRegistrar;
//! use crate::repositories::users::InMemoryUserRepository;
//!
//! let mut registrar = UserRegistrar::new(InMemoryUserRepository::new());
//! let result = registrar.create_user(request);
//! ```

pub mod users;
