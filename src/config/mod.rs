//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, Rate Limiting 설정
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="development"   # development, test, staging, production
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//! ```
//!
//! `PROFILE` 값에 따라 `.env.dev`, `.env.prod`, `.env` 중 하나가 먼저 로드됩니다.

pub mod data_config;

pub use data_config::*;
