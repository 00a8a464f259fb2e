//! # 사용자 관련 응답 DTO 모듈
//!
//! - `CreateUserResponse` - 등록 결과 (`isSuccess`, `errors`)
//! - `UserResponse` - 저장된 사용자 조회용 뷰
//!
//! ```json
//! { "isSuccess": true, "errors": "User Created" }
//! ```

pub mod user_response;

pub use user_response::{CreateUserResponse, UserResponse, USER_CREATED_MESSAGE};
