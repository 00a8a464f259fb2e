//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 사용자 컬렉션을 [`UserStore`](users::user_repo::UserStore) trait으로 추상화합니다.
//! 등록 서비스는 전역 상태 대신 주입된 저장소만 사용합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{InMemoryUserRepository, UserStore};
//!
//! let mut repo = InMemoryUserRepository::new();
//! repo.add(user);
//! assert_eq!(repo.users().len(), 1);
//! ```

pub mod users;
