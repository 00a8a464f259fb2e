//! # Users DTO Module
//!
//! 사용자 등록 요청/응답 DTO를 제공합니다.
//!
//! - [`request`] - `CreateUserRequest`: 6개의 원시 문자열 입력
//! - [`response`] - `CreateUserResponse`, `UserResponse`

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
