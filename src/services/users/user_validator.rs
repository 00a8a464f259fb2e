//! # 필수 필드 검증
//!
//! `CreateUserRequest`의 `validator` 규칙을 실행하고, 누락된 필드의 메시지 조각을
//! 고정된 순서(이름, 이메일, 주소, 전화)로 이어 붙여 하나의 `ValidationError`로 만듭니다.

use validator::Validate;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::CreateUserRequest;

/// 검증 대상 필드와 메시지 조각 (출력 순서 고정)
const REQUIRED_FIELDS: [(&str, &str); 4] = [
    ("name", "The name is required"),
    ("email", " The email is required"),
    ("address", " The address is required"),
    ("phone", " The phone is required"),
];

/// 필수 필드가 모두 있는지 확인합니다.
///
/// # Errors
///
/// 하나 이상의 필드가 없거나 비어 있으면 조각들을 이어 붙인
/// `AppError::ValidationError`를 반환합니다.
///
/// ```rust,ignore
/// // 이름과 전화가 없는 경우
/// assert_eq!(
///     validate_required_fields(&request).unwrap_err().to_string(),
///     "The name is required The phone is required"
/// );
/// ```
pub fn validate_required_fields(request: &CreateUserRequest) -> AppResult<()> {
    let Err(errors) = request.validate() else {
        return Ok(());
    };

    let field_errors = errors.field_errors();
    let message: String = REQUIRED_FIELDS
        .iter()
        .filter(|(field, _)| field_errors.contains_key(*field))
        .map(|(_, fragment)| *fragment)
        .collect();

    if message.is_empty() {
        return Err(AppError::ValidationError(errors.to_string()));
    }

    Err(AppError::ValidationError(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        name: Option<&str>,
        email: Option<&str>,
        address: Option<&str>,
        phone: Option<&str>,
    ) -> CreateUserRequest {
        CreateUserRequest::new(name, email, address, phone, Some("Normal"), Some("124"))
    }

    fn message_of(request: &CreateUserRequest) -> String {
        validate_required_fields(request).unwrap_err().to_string()
    }

    #[test]
    fn test_all_fields_present() {
        let req = request(Some("Mike"), Some("mike@gmail.com"), Some("Av. Juan G"), Some("+349 1122354215"));

        assert!(validate_required_fields(&req).is_ok());
    }

    #[test]
    fn test_each_missing_field_has_its_own_fragment() {
        let req = request(None, Some("mike@gmail.com"), Some("Av. Juan G"), Some("+349 1122354215"));
        assert_eq!(message_of(&req), "The name is required");

        let req = request(Some("Mike"), None, Some("Av. Juan G"), Some("+349 1122354215"));
        assert_eq!(message_of(&req), " The email is required");

        let req = request(Some("Mike"), Some("mike@gmail.com"), None, Some("+349 1122354215"));
        assert_eq!(message_of(&req), " The address is required");

        let req = request(Some("Mike"), Some("mike@gmail.com"), Some("Av. Juan G"), None);
        assert_eq!(message_of(&req), " The phone is required");
    }

    #[test]
    fn test_fragments_are_joined_in_fixed_order() {
        let req = request(None, None, None, None);

        assert_eq!(
            message_of(&req),
            "The name is required The email is required The address is required The phone is required"
        );
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let req = request(Some("Mike"), Some(""), Some("Av. Juan G"), Some(""));

        assert_eq!(message_of(&req), " The email is required The phone is required");
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let req = request(Some(" "), Some("mike@gmail.com"), Some("Av. Juan G"), Some("+349 1122354215"));

        assert!(validate_required_fields(&req).is_ok());
    }
}
