//! # 중복 사용자 판단
//!
//! 후보가 다음 중 하나라도 기존 사용자와 일치하면 중복입니다 (첫 일치에서 종료).
//!
//! - 정규화된 이메일이 같음
//! - 전화번호가 같음
//! - 이름과 주소가 모두 같음 (이름만 같으면 중복이 아님)
//!
//! 전화, 이름, 주소는 대소문자 구분, 공백 제거 없는 정확한 비교입니다.

use std::borrow::Cow;
use crate::domain::entities::users::{User, UserIdentity};
use crate::services::users::email_normalizer::normalize_email;

/// 후보가 기존 사용자 중 누군가와 중복되는지 확인합니다.
///
/// `candidate.email`은 이미 정규화된 값이어야 합니다.
pub fn is_duplicate<'a, I>(candidate: &UserIdentity<'_>, existing: I) -> bool
where
    I: IntoIterator<Item = &'a User>,
{
    existing
        .into_iter()
        .any(|user| matches_user(candidate, &user.identity()))
}

fn matches_user(candidate: &UserIdentity<'_>, existing: &UserIdentity<'_>) -> bool {
    normalized(existing.email) == candidate.email
        || existing.phone == candidate.phone
        || (existing.name == candidate.name && existing.address == candidate.address)
}

// 저장된 이메일은 보통 이미 정규형이지만, 외부에서 채운 컬렉션은 그렇지 않을 수 있다.
fn normalized(email: &str) -> Cow<'_, str> {
    match normalize_email(email) {
        Ok(email) => Cow::Owned(email),
        Err(_) => Cow::Borrowed(email),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use crate::domain::entities::users::UserType;

    fn existing() -> Vec<User> {
        vec![User::new(
            "Mike".to_string(),
            "mike@gmail.com".to_string(),
            "Av. Juan G".to_string(),
            "+349 1122354215".to_string(),
            UserType::Normal,
            Decimal::new(124, 0),
        )]
    }

    fn candidate<'a>(name: &'a str, email: &'a str, address: &'a str, phone: &'a str) -> UserIdentity<'a> {
        UserIdentity { name, email, address, phone }
    }

    #[test]
    fn test_same_email_is_duplicate() {
        let c = candidate("Mike2", "mike@gmail.com", "Av. Juan G2", "+349 11223542115");

        assert!(is_duplicate(&c, &existing()));
    }

    #[test]
    fn test_same_phone_is_duplicate() {
        let c = candidate("Mike2", "mike@gmail.comd", "Av. Juan G3", "+349 1122354215");

        assert!(is_duplicate(&c, &existing()));
    }

    #[test]
    fn test_same_name_and_address_is_duplicate() {
        let c = candidate("Mike", "mike@gmail.com2", "Av. Juan G", "+349 1122354215d");

        assert!(is_duplicate(&c, &existing()));
    }

    #[test]
    fn test_same_name_other_address_is_not_duplicate() {
        let c = candidate("Mike", "mike2@gmail.com", "Av. Juan G1", "+349 112323954215");

        assert!(!is_duplicate(&c, &existing()));
    }

    #[test]
    fn test_comparison_is_case_sensitive() {
        let c = candidate("mike", "other@gmail.com", "av. juan g", "+349 000");

        assert!(!is_duplicate(&c, &existing()));
    }

    #[test]
    fn test_stored_email_is_compared_in_normalized_form() {
        let mut users = existing();
        users[0].email = "m.ike+old@gmail.com".to_string();
        let c = candidate("Other", "mike@gmail.com", "Elsewhere", "+1 555");

        assert!(is_duplicate(&c, &users));
    }

    #[test]
    fn test_empty_collection_has_no_duplicates() {
        let c = candidate("Mike", "mike@gmail.com", "Av. Juan G", "+349 1122354215");

        assert!(!is_duplicate(&c, &Vec::<User>::new()));
    }
}
