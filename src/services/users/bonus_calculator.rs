//! # 사용자 타입별 보너스 계산
//!
//! 초기 금액에 타입과 금액 구간에 따른 비율을 곱한 값을 더합니다.
//!
//! | UserType  | money > 100 | 10 < money < 100 | 그 외 |
//! |-----------|-------------|------------------|-------|
//! | Normal    | +12%        | +80%             | 0%    |
//! | SuperUser | +20%        | 0%               | 0%    |
//! | Premium   | +200%       | 0%               | 0%    |
//!
//! 경계값 100은 모든 타입에서 변경되지 않습니다.
//! 결과는 불필요한 소수점 이하 0을 제거한 형태(`121.2`)로 반환됩니다.

use rust_decimal::Decimal;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::UserType;

const MONEY_OVERFLOW_MESSAGE: &str = "The money is not a valid amount";

/// 보너스가 반영된 금액을 반환합니다.
///
/// # Errors
///
/// 보너스 적용 결과가 `Decimal` 범위를 넘으면 `AppError::InvalidInput`을 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(apply_bonus(UserType::Normal, Decimal::new(101, 0))?, Decimal::new(11312, 2));
/// ```
pub fn apply_bonus(user_type: UserType, money: Decimal) -> AppResult<Decimal> {
    let rate = bonus_rate(user_type, money);
    if rate.is_zero() {
        return Ok(money.normalize());
    }

    money
        .checked_mul(rate)
        .and_then(|bonus| money.checked_add(bonus))
        .map(|total| total.normalize())
        .ok_or_else(|| AppError::InvalidInput(MONEY_OVERFLOW_MESSAGE.to_string()))
}

fn bonus_rate(user_type: UserType, money: Decimal) -> Decimal {
    match user_type {
        UserType::Normal if money > Decimal::ONE_HUNDRED => Decimal::new(12, 2),
        UserType::Normal if money < Decimal::ONE_HUNDRED && money > Decimal::TEN => Decimal::new(8, 1),
        UserType::SuperUser if money > Decimal::ONE_HUNDRED => Decimal::new(20, 2),
        UserType::Premium if money > Decimal::ONE_HUNDRED => Decimal::TWO,
        _ => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn bonus(money: &str, user_type: &str) -> Decimal {
        let user_type = UserType::from_str(user_type).unwrap();
        apply_bonus(user_type, Decimal::from_str(money).unwrap()).unwrap()
    }

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_normal_fixtures() {
        assert_eq!(bonus("100", "Normal"), dec("100"));
        assert_eq!(bonus("101", "Normal"), dec("113.12"));
        assert_eq!(bonus("99", "Normal"), dec("178.2"));
    }

    #[test]
    fn test_super_user_fixtures() {
        assert_eq!(bonus("100", "SuperUser"), dec("100"));
        assert_eq!(bonus("101", "SuperUser"), dec("121.2"));
        assert_eq!(bonus("99", "SuperUser"), dec("99"));
    }

    #[test]
    fn test_premium_fixtures() {
        assert_eq!(bonus("100", "Premium"), dec("100"));
        assert_eq!(bonus("101", "Premium"), dec("303"));
        assert_eq!(bonus("99", "Premium"), dec("99"));
    }

    #[test]
    fn test_normal_small_amounts_are_unchanged() {
        assert_eq!(bonus("10", "Normal"), dec("10"));
        assert_eq!(bonus("5", "Normal"), dec("5"));
        assert_eq!(bonus("0", "Normal"), dec("0"));
    }

    #[test]
    fn test_fractional_amounts() {
        assert_eq!(bonus("100.5", "SuperUser"), dec("120.6"));
        assert_eq!(bonus("10.5", "Normal"), dec("18.9"));
    }

    #[test]
    fn test_result_has_no_trailing_zeros() {
        assert_eq!(bonus("101", "SuperUser").to_string(), "121.2");
        assert_eq!(bonus("101", "Premium").to_string(), "303");
        assert_eq!(bonus("99", "Normal").to_string(), "178.2");
    }

    #[test]
    fn test_overflowing_bonus_is_an_error() {
        for user_type in [UserType::Premium, UserType::Normal, UserType::SuperUser] {
            assert_eq!(
                apply_bonus(user_type, Decimal::MAX),
                Err(AppError::InvalidInput(MONEY_OVERFLOW_MESSAGE.to_string())),
                "{user_type}"
            );
        }
    }
}
