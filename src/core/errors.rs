//! # Application Error Handling System
//!
//! 사용자 등록 파이프라인 전체에서 사용하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를 구현하여
//! HTTP 어댑터에서 그대로 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! | AppError | HTTP Status | 발생 단계 |
//! |----------|-------------|-----------|
//! | `ValidationError` | 400 Bad Request | 필수 필드 누락 |
//! | `InvalidInput` | 400 Bad Request | 금액 파싱 실패, 잘못된 이메일 형식 |
//! | `InvalidUserType` | 400 Bad Request | 알 수 없는 사용자 타입 |
//! | `DuplicateUser` | 409 Conflict | 기존 사용자와 중복 |
//! | `InternalError` | 500 Internal Server Error | 저장소 잠금 실패 등 |
//!
//! 모든 실패 경로에서 사용자 컬렉션은 변경되지 않습니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! fn parse_money(raw: &str) -> AppResult<Decimal> {
//!     raw.trim()
//!         .parse::<Decimal>()
//!         .map_err(|_| AppError::InvalidInput("The money is not a valid amount".to_string()))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// `Display` 출력이 곧 호출자에게 전달되는 `errors` 메시지이므로,
/// 검증 메시지는 가공 없이 그대로 출력됩니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 필수 필드 누락 에러
    ///
    /// 누락된 필드마다 고정된 메시지 조각이 이어 붙은 문자열을 담습니다.
    /// (예: `"The name is required The phone is required"`)
    #[error("{0}")]
    ValidationError(String),

    /// 기존 사용자와 중복되는 후보
    #[error("The user is duplicated")]
    DuplicateUser,

    /// 알 수 없는 사용자 타입 태그
    #[error("The user type '{0}' is not valid")]
    InvalidUserType(String),

    /// 파싱할 수 없는 입력 (금액, 이메일 형식)
    #[error("{0}")]
    InvalidInput(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_)
            | AppError::InvalidInput(_)
            | AppError::InvalidUserType(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateUser => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 본문은 파이프라인 결과와 같은 형태를 사용합니다:
    ///
    /// ```json
    /// { "isSuccess": false, "errors": "The user is duplicated" }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "isSuccess": false,
                "errors": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_displays_message_verbatim() {
        let error = AppError::ValidationError(" The email is required".to_string());

        assert_eq!(error.to_string(), " The email is required");
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_duplicate_user_response() {
        let error = AppError::DuplicateUser;

        assert_eq!(error.to_string(), "The user is duplicated");
        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_invalid_user_type_response() {
        let error = AppError::InvalidUserType("Gold".to_string());

        assert_eq!(error.to_string(), "The user type 'Gold' is not valid");
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_input_response() {
        let error = AppError::InvalidInput("The money is not a valid amount".to_string());

        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("store lock poisoned".to_string());

        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
