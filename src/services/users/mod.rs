//! 사용자 등록 서비스 모듈
//!
//! 등록 파이프라인의 각 단계를 순수 함수로 분리하고,
//! [`UserRegistrar`](user_service::UserRegistrar)가 이를 순서대로 실행합니다.
//!
//! # Modules
//!
//! - [`user_validator`] - 필수 필드 검증과 고정 순서 메시지 조립
//! - [`email_normalizer`] - `+태그`와 `.` 제거
//! - [`duplicate_detector`] - 이메일/전화/이름+주소 중복 판단
//! - [`bonus_calculator`] - 사용자 타입별 금액 보너스
//! - [`user_service`] - 파이프라인 오케스트레이션과 저장
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::email_normalizer::normalize_email;
//!
//! assert_eq!(normalize_email("mike+1@gmail.com")?, "mike@gmail.com");
//! ```

pub mod user_validator;
pub mod email_normalizer;
pub mod duplicate_detector;
pub mod bonus_calculator;
pub mod user_service;

pub use user_service::UserRegistrar;
