//! API 라우트 설정 모듈
//!
//! 사용자 등록 API와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(registrar.clone())
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::{get, web, HttpResponse};
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `POST /api/v1/users` - 사용자 등록
/// - `GET /api/v1/users` - 등록된 사용자 목록
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Mike","email":"mike@gmail.com","address":"Av. Juan G","phone":"+349 1122354215","userType":"Normal","money":"124"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .app_data(handlers::users::json_config())
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
    );
}

/// 헬스체크 엔드포인트
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
