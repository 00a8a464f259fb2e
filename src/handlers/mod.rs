//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 등록 서비스 호출로 변환하는 핸들러들입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client                                          
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)          ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   UserRegistrar              ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UserStore                  ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 에러는 `AppError`의 `ResponseError` 구현을 통해 상태 코드와
//! `{ "isSuccess": false, "errors": ... }` 본문으로 변환됩니다.

pub mod users;
