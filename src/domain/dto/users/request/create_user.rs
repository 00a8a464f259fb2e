//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 등록을 위한 원시 입력 데이터 구조를 정의합니다.
//!
//! ## 검증 규칙
//!
//! `name`, `email`, `address`, `phone`은 값이 있어야 하고 빈 문자열이면 안 됩니다.
//! 값은 공백 제거 없이 그대로 사용됩니다.
//! `user_type`과 `money`는 여기서 검증하지 않고 파이프라인의 파싱 단계에서 처리합니다.
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "name": "Mike",
//!   "email": "mike+promo@gmail.com",
//!   "address": "Av. Juan G",
//!   "phone": "+349 1122354215",
//!   "userType": "Normal",
//!   "money": "124"
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 새로운 사용자 등록을 위한 요청 DTO
///
/// 각 필드의 검증 메시지는 등록 결과의 `errors`에 그대로 이어 붙는 조각입니다.
/// 첫 번째 조각(`name`)만 앞 공백이 없습니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(
        required(message = "The name is required"),
        length(min = 1, message = "The name is required")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = " The email is required"),
        length(min = 1, message = " The email is required")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = " The address is required"),
        length(min = 1, message = " The address is required")
    )]
    pub address: Option<String>,

    #[validate(
        required(message = " The phone is required"),
        length(min = 1, message = " The phone is required")
    )]
    pub phone: Option<String>,

    /// 사용자 타입 태그 (`Normal`, `SuperUser`, `Premium`)
    pub user_type: Option<String>,

    /// 초기 금액 (10진수 문자열)
    pub money: Option<String>,
}

impl CreateUserRequest {
    /// 6개의 원시 값으로 요청을 만듭니다.
    pub fn new(
        name: Option<&str>,
        email: Option<&str>,
        address: Option<&str>,
        phone: Option<&str>,
        user_type: Option<&str>,
        money: Option<&str>,
    ) -> Self {
        Self {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            address: address.map(str::to_string),
            phone: phone.map(str::to_string),
            user_type: user_type.map(str::to_string),
            money: money.map(str::to_string),
        }
    }
}
