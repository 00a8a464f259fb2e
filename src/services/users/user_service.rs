//! # 사용자 등록 서비스 구현
//!
//! 원시 입력을 받아 사용자 컬렉션에 추가하기까지의 선형 파이프라인입니다.
//!
//! ## 파이프라인
//!
//! ```text
//! CreateUserRequest
//!   │ 1. 금액 파싱            ── InvalidInput
//!   │ 2. 필수 필드 검증        ── ValidationError
//!   │ 3. 이메일 정규화         ── InvalidInput
//!   │ 4. 중복 검사            ── DuplicateUser
//!   │ 5. 사용자 타입 + 보너스   ── InvalidUserType, InvalidInput
//!   │ 6. 저장소에 추가
//!   ▼
//! CreateUserResponse { isSuccess: true, errors: "User Created" }
//! ```
//!
//! 6단계 이전의 모든 단계는 순수 함수이므로, 어떤 실패 경로에서도 컬렉션은 변경되지 않습니다.
//!
//! ## 동시성
//!
//! `UserRegistrar`는 내부 잠금을 갖지 않습니다. 4~6단계의 읽기-추가 구간을
//! 원자적으로 유지하려면 호출자가 호출을 직렬화해야 합니다
//! (HTTP 어댑터는 `Mutex`로 감쌉니다).

use std::str::FromStr;
use rust_decimal::Decimal;
use crate::{
    core::errors::{AppError, AppResult},
    domain::{
        dto::users::{request::CreateUserRequest, response::CreateUserResponse},
        entities::users::{User, UserIdentity, UserType},
    },
    repositories::users::user_repo::UserStore,
    services::users::{
        bonus_calculator::apply_bonus,
        duplicate_detector::is_duplicate,
        email_normalizer::normalize_email,
        user_validator::validate_required_fields,
    },
};

const INVALID_MONEY_MESSAGE: &str = "The money is not a valid amount";

/// 사용자 등록 서비스
///
/// 주입된 [`UserStore`]를 소유하며, 등록 파이프라인의 유일한 진입점입니다.
///
/// ```rust,ignore
/// let mut registrar = UserRegistrar::new(InMemoryUserRepository::new());
/// let response = registrar.create_user(request);
/// assert!(response.is_success);
/// ```
#[derive(Debug)]
pub struct UserRegistrar<S: UserStore> {
    store: S,
}

impl<S: UserStore> UserRegistrar<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 저장된 사용자 목록
    pub fn users(&self) -> &[User] {
        self.store.users()
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// 사용자를 등록하고 호출자용 결과 값을 반환합니다.
    ///
    /// 성공 시 `{ is_success: true, errors: "User Created" }`,
    /// 실패 시 `{ is_success: false, errors: <실패 메시지> }`입니다.
    pub fn create_user(&mut self, request: CreateUserRequest) -> CreateUserResponse {
        CreateUserResponse::from(self.register(request))
    }

    /// 등록 파이프라인을 실행합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - 컬렉션에 추가된 사용자 (정규화된 이메일, 보너스 반영 금액)
    ///
    /// # Errors
    ///
    /// * `AppError::InvalidInput` - 금액을 파싱할 수 없거나 음수, 보너스 적용 시 범위 초과, 또는 이메일 형식 오류
    /// * `AppError::ValidationError` - 필수 필드 누락
    /// * `AppError::DuplicateUser` - 기존 사용자와 중복
    /// * `AppError::InvalidUserType` - 알 수 없는 사용자 타입
    pub fn register(&mut self, request: CreateUserRequest) -> AppResult<User> {
        let money = parse_money(request.money.as_deref())?;

        validate_required_fields(&request)?;

        let CreateUserRequest {
            name,
            email,
            address,
            phone,
            user_type,
            ..
        } = request;
        let (Some(name), Some(email), Some(address), Some(phone)) = (name, email, address, phone) else {
            return Err(AppError::InternalError("required fields missing after validation".to_string()));
        };

        let email = normalize_email(&email)?;
        log::debug!("Normalized candidate email: {}", email);

        let candidate = UserIdentity {
            name: &name,
            email: &email,
            address: &address,
            phone: &phone,
        };
        if is_duplicate(&candidate, self.store.users()) {
            log::warn!("Rejected duplicated user: {}", email);
            return Err(AppError::DuplicateUser);
        }

        let user_type = UserType::from_str(user_type.as_deref().unwrap_or_default())?;
        let money = apply_bonus(user_type, money)?;
        log::debug!("Applied {} bonus: {}", user_type, money);

        let user = User::new(name, email, address, phone, user_type, money);
        self.store.add(user.clone());

        log::info!("User created: {} ({})", user.email, user.user_type);
        Ok(user)
    }
}

fn parse_money(raw: Option<&str>) -> AppResult<Decimal> {
    raw.and_then(|money| Decimal::from_str(money.trim()).ok())
        .filter(|money| *money >= Decimal::ZERO)
        .ok_or_else(|| AppError::InvalidInput(INVALID_MONEY_MESSAGE.to_string()))
}
