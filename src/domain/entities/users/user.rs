//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 등록 파이프라인을 통과한 값만 이 타입으로 컬렉션에 저장됩니다.

use std::fmt;
use std::str::FromStr;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;

/// 사용자 타입
///
/// 등록 시점의 보너스 규칙을 결정합니다. 문자열 태그는 대소문자를 구분합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    Normal,
    SuperUser,
    Premium,
}

impl UserType {
    /// 태그 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Normal => "Normal",
            UserType::SuperUser => "SuperUser",
            UserType::Premium => "Premium",
        }
    }
}

impl FromStr for UserType {
    type Err = AppError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "Normal" => Ok(UserType::Normal),
            "SuperUser" => Ok(UserType::SuperUser),
            "Premium" => Ok(UserType::Premium),
            other => Err(AppError::InvalidUserType(other.to_string())),
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 사용자 엔티티
///
/// 컬렉션에 저장되는 사용자 레코드입니다.
/// 저장 이후에는 컬렉션이 유일한 소유자이며, 수정/삭제 연산은 없습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    /// 정규화된 이메일 (`+태그` 제거, 로컬 파트의 `.` 제거)
    pub email: String,
    pub address: String,
    pub phone: String,
    pub user_type: UserType,
    /// 보너스가 반영된 금액
    pub money: Decimal,
}

impl User {
    pub fn new(
        name: String,
        email: String,
        address: String,
        phone: String,
        user_type: UserType,
        money: Decimal,
    ) -> Self {
        Self {
            name,
            email,
            address,
            phone,
            user_type,
            money,
        }
    }

    /// 중복 검사에 쓰이는 식별 필드 뷰
    pub fn identity(&self) -> UserIdentity<'_> {
        UserIdentity {
            name: &self.name,
            email: &self.email,
            address: &self.address,
            phone: &self.phone,
        }
    }
}

/// 중복 검사 대상이 되는 식별 필드들의 빌린 뷰
///
/// 후보 사용자는 아직 `User`로 만들어지기 전(보너스 계산 전)에 검사되므로,
/// 후보와 저장된 사용자 모두 이 뷰로 비교합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdentity<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub address: &'a str,
    pub phone: &'a str,
}
