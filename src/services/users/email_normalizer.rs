//! # 이메일 정규화
//!
//! 중복 비교와 저장에 사용하는 이메일의 정규형을 만듭니다.
//!
//! 1. `@` 기준으로 로컬 파트와 도메인을 나눕니다 (`@`는 정확히 하나).
//! 2. 로컬 파트에서 첫 번째 `+`부터 끝까지 잘라냅니다.
//! 3. 남은 로컬 파트의 `.`을 모두 제거합니다.
//! 4. `local@domain`으로 다시 조합합니다. 도메인은 변경하지 않습니다.

use crate::core::errors::{AppError, AppResult};

const INVALID_EMAIL_MESSAGE: &str = "The email is not a valid address";

/// 이메일을 정규화합니다.
///
/// # Errors
///
/// `@`가 없거나 둘 이상이면, 또는 정규화 후 로컬 파트나 도메인이 비어 있으면
/// `AppError::InvalidInput`을 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(normalize_email("mike+1@gmail.com")?, "mike@gmail.com");
/// assert_eq!(normalize_email("m.i.k.e@gmail.com")?, "mike@gmail.com");
/// assert_eq!(normalize_email("a+b+c@x.com")?, "a@x.com");
/// ```
pub fn normalize_email(email: &str) -> AppResult<String> {
    let (local, domain) = split_address(email)
        .ok_or_else(|| AppError::InvalidInput(INVALID_EMAIL_MESSAGE.to_string()))?;

    let untagged = match local.split_once('+') {
        Some((base, _)) => base,
        None => local,
    };
    let local = untagged.replace('.', "");
    if local.is_empty() {
        return Err(AppError::InvalidInput(INVALID_EMAIL_MESSAGE.to_string()));
    }

    Ok(format!("{}@{}", local, domain))
}

fn split_address(email: &str) -> Option<(&str, &str)> {
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    Some((local, domain))
}
