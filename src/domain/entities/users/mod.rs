//! Users Entity Module
//!
//! 등록된 사용자 한 명을 표현하는 [`User`](user::User) 엔티티와
//! 보너스 계산을 결정하는 [`UserType`](user::UserType) 태그를 포함합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{User, UserType};
//!
//! let user_type: UserType = "Premium".parse()?;
//! ```

pub mod user;

pub use user::{User, UserIdentity, UserType};
