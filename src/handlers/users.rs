//! # User Registration HTTP Handlers
//!
//! 등록 파이프라인을 HTTP로 노출하는 얇은 어댑터입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 사용자 등록 | 201 Created |
//! | `GET` | `/api/v1/users` | 등록된 사용자 목록 | 200 OK |
//!
//! 등록 서비스는 `Mutex`로 감싸 공유되며, 요청 하나의 읽기-추가 구간이
//! 끝날 때까지 다른 요청은 컬렉션을 변경할 수 없습니다.

use std::sync::{Mutex, MutexGuard};
use actix_web::{web, HttpResponse, get, post};
use actix_web::error::JsonPayloadError;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::CreateUserRequest;
use crate::domain::dto::users::response::{CreateUserResponse, UserResponse};
use crate::repositories::users::InMemoryUserRepository;
use crate::services::users::UserRegistrar;

/// 핸들러 간에 공유되는 등록 서비스
pub type SharedRegistrar = web::Data<Mutex<UserRegistrar<InMemoryUserRepository>>>;

fn lock(registrar: &SharedRegistrar) -> Result<MutexGuard<'_, UserRegistrar<InMemoryUserRepository>>, AppError> {
    registrar
        .lock()
        .map_err(|e| AppError::InternalError(format!("user store lock poisoned: {}", e)))
}

/// JSON 본문 추출 설정
///
/// 역직렬화 실패도 `{ "isSuccess": false, "errors": ... }` 형태의 400 응답이 되도록
/// `AppError::InvalidInput`으로 변환합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req| {
        log::warn!("Rejected malformed request body: {}", err);
        AppError::InvalidInput(err.to_string()).into()
    })
}

/// 사용자 등록 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Mike",
///   "email": "mike+1@gmail.com",
///   "address": "Av. Juan G",
///   "phone": "+349 1122354215",
///   "userType": "Normal",
///   "money": "124"
/// }
/// ```
///
/// # 응답
///
/// - 201 Created: `{ "isSuccess": true, "errors": "User Created" }`
/// - 400 Bad Request: 필수 필드 누락, 금액/이메일/사용자 타입 오류, 잘못된 JSON 본문
/// - 409 Conflict: `{ "isSuccess": false, "errors": "The user is duplicated" }`
#[post("")]
pub async fn create_user(
    registrar: SharedRegistrar,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let mut registrar = lock(&registrar)?;
    registrar.register(payload.into_inner())?;

    Ok(HttpResponse::Created().json(CreateUserResponse::created()))
}

/// 등록된 사용자 목록 핸들러
#[get("")]
pub async fn list_users(
    registrar: SharedRegistrar,
) -> Result<HttpResponse, AppError> {
    let registrar = lock(&registrar)?;
    let users: Vec<UserResponse> = registrar.users().iter().map(UserResponse::from).collect();

    Ok(HttpResponse::Ok().json(users))
}
