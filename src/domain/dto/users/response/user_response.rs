use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::core::errors::AppResult;
use crate::domain::entities::users::{User, UserType};

/// 등록 성공 시 `errors` 필드에 담기는 메시지
pub const USER_CREATED_MESSAGE: &str = "User Created";

/// 사용자 등록 결과 DTO
///
/// 성공 시 `errors`는 `"User Created"`, 실패 시 실패 사유 메시지입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    pub is_success: bool,
    pub errors: String,
}

impl CreateUserResponse {
    pub fn created() -> Self {
        Self {
            is_success: true,
            errors: USER_CREATED_MESSAGE.to_string(),
        }
    }

    pub fn failed(errors: impl Into<String>) -> Self {
        Self {
            is_success: false,
            errors: errors.into(),
        }
    }
}

impl<T> From<AppResult<T>> for CreateUserResponse {
    fn from(result: AppResult<T>) -> Self {
        match result {
            Ok(_) => Self::created(),
            Err(e) => Self::failed(e.to_string()),
        }
    }
}

/// 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub user_type: UserType,
    pub money: Decimal,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        let User {
            name,
            email,
            address,
            phone,
            user_type,
            money,
        } = user;

        Self {
            name: name.clone(),
            email: email.clone(),
            address: address.clone(),
            phone: phone.clone(),
            user_type: *user_type,
            money: *money,
        }
    }
}
