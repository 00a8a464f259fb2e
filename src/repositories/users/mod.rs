//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserStore`](user_repo::UserStore)는 추가와 열거만 제공하며,
//! 유일성 제약은 두지 않습니다. 중복 판단은 서비스 계층의 책임입니다.

pub mod user_repo;

pub use user_repo::{InMemoryUserRepository, UserStore};
