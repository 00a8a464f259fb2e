//! # Data Transfer Objects (DTO) Module
//!
//! 등록 파이프라인의 입력과 출력 계약을 정의합니다.
//!
//! ```text
//! 원시 입력 (JSON / 호출자)
//!     │
//!     ▼
//! CreateUserRequest  ── validator 기반 필수 필드 규칙
//!     │
//!     ▼
//! UserRegistrar 파이프라인
//!     │
//!     ▼
//! CreateUserResponse { isSuccess, errors }
//! ```
//!
//! 모든 DTO는 `serde`로 직렬화되며 JSON 필드명은 camelCase를 사용합니다.

pub mod users;

pub use users::*;
