//! # Core Module
//!
//! 서비스 전 계층이 공유하는 핵심 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 등록 파이프라인의 모든 실패 종류
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **AppResult**: `Result<T, AppError>` 별칭
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! fn ensure_present(value: Option<&str>) -> AppResult<&str> {
//!     value.ok_or_else(|| AppError::ValidationError("The name is required".to_string()))
//! }
//! ```

pub mod errors;

pub use errors::*;
