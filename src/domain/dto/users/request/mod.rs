//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 원시 입력을 구조화된 Rust 타입으로 표현합니다.
//! 모든 필드는 `Option<String>`이며, 누락 여부 판단은 `validator` 규칙과
//! 서비스 계층의 검증기가 담당합니다.

pub mod create_user;

pub use create_user::CreateUserRequest;
