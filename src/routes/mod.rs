//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//!
//! # 라우트 구성
//!
//! ## Public 라우트 (인증 불필요)
//!
//! - `GET /health` - 헬스체크
//! - `GET /api/v1/tours`, `GET /api/v1/tours/{slug}` - 투어
//! - `GET /api/v1/hotels`, `GET /api/v1/hotels/{id}` - 호텔
//! - `GET /api/v1/destinations`, `GET /api/v1/destinations/{slug}` - 목적지
//! - `GET /api/v1/experience-types` - 체험 유형
//! - `GET /api/v1/experiences`, `GET /api/v1/experiences/{slug}` - 체험
//! - `GET /api/v1/costs` - 전역 비용
//! - `GET /api/v1/travel-times?from&to` - 이동 시간 조회
//! - `POST /api/v1/tour-requests` - 여행 문의 제출
//! - `POST /api/v1/auth/login`, `POST /api/v1/auth/logout` - 관리자 로그인/로그아웃
//! - `GET /api/uploads/{filename}` - 업로드 파일 제공
//!
//! ## Admin 라우트 (`admin_session` 쿠키 필요)
//!
//! `/api/v1/admin` 스코프 전체가 [`AdminSessionMiddleware`]로 보호됩니다:
//! 콘텐츠 CRUD, 문의 검토, 이미지 업로드, 관리자 프로필.
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/admin")
//!         .wrap(AdminSessionMiddleware::required())
//!         .service(web::scope("/tours").service(handlers::tours::create_tour))
//! );
//! ```
//!
//! [`AdminSessionMiddleware`]: crate::middlewares::AdminSessionMiddleware

use crate::handlers;
use crate::middlewares::AdminSessionMiddleware;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_public_routes(cfg);
    configure_auth_routes(cfg);
    configure_admin_routes(cfg);
    configure_upload_routes(cfg);
}

/// 공개 콘텐츠 라우트를 설정합니다
///
/// 마케팅 사이트가 렌더링에 사용하는 읽기 전용 엔드포인트와
/// 문의 제출 엔드포인트를 등록합니다.
fn configure_public_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/tours")
            .service(handlers::tours::list_tours)
            .service(handlers::tours::get_tour_by_slug)
    );

    cfg.service(
        web::scope("/api/v1/hotels")
            .service(handlers::hotels::list_hotels)
            .service(handlers::hotels::get_hotel_by_id)
    );

    cfg.service(
        web::scope("/api/v1/destinations")
            .service(handlers::destinations::list_destinations)
            .service(handlers::destinations::get_destination_by_slug)
    );

    cfg.service(
        web::scope("/api/v1/experience-types")
            .service(handlers::experiences::list_experience_types)
    );

    cfg.service(
        web::scope("/api/v1/experiences")
            .service(handlers::experiences::list_experiences)
            .service(handlers::experiences::get_experience_by_slug)
    );

    cfg.service(
        web::scope("/api/v1/costs")
            .service(handlers::costs::list_costs)
    );

    cfg.service(
        web::scope("/api/v1/travel-times")
            .service(handlers::travel_times::get_travel_time)
    );

    cfg.service(
        web::scope("/api/v1/tour-requests")
            .service(handlers::tour_requests::submit_tour_request)
    );
}

/// 인증 라우트를 설정합니다
///
/// 로그인/로그아웃은 인증을 얻기 위한 엔드포인트이므로 Public입니다.
/// 세션이 필요한 `/me`는 admin 스코프에 있습니다.
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::admin_login)
            .service(handlers::auth::admin_logout)
    );
}

/// 관리자 라우트를 설정합니다
///
/// `/api/v1/admin` 스코프 전체에 세션 미들웨어를 적용합니다.
/// 유효한 `admin_session` 쿠키가 없으면 모든 요청이 401입니다.
fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin")
            .wrap(AdminSessionMiddleware::required())
            .service(
                web::scope("/auth")
                    .service(handlers::auth::admin_me)
            )
            .service(
                web::scope("/tours")
                    .service(handlers::tours::admin_list_tours)
                    .service(handlers::tours::admin_get_tour)
                    .service(handlers::tours::create_tour)
                    .service(handlers::tours::update_tour)
                    .service(handlers::tours::delete_tour)
            )
            .service(
                web::scope("/hotels")
                    .service(handlers::hotels::admin_list_hotels)
                    .service(handlers::hotels::create_hotel)
                    .service(handlers::hotels::update_hotel)
                    .service(handlers::hotels::delete_hotel)
            )
            .service(
                web::scope("/destinations")
                    .service(handlers::destinations::admin_list_destinations)
                    .service(handlers::destinations::create_destination)
                    .service(handlers::destinations::update_destination)
                    .service(handlers::destinations::delete_destination)
            )
            .service(
                web::scope("/experience-types")
                    .service(handlers::experiences::admin_list_experience_types)
                    .service(handlers::experiences::create_experience_type)
                    .service(handlers::experiences::update_experience_type)
                    .service(handlers::experiences::delete_experience_type)
            )
            .service(
                web::scope("/experiences")
                    .service(handlers::experiences::admin_list_experiences)
                    .service(handlers::experiences::create_experience)
                    .service(handlers::experiences::update_experience)
                    .service(handlers::experiences::delete_experience)
            )
            .service(
                web::scope("/tour-requests")
                    .service(handlers::tour_requests::list_tour_requests)
                    .service(handlers::tour_requests::get_tour_request)
                    .service(handlers::tour_requests::update_tour_request_status)
                    .service(handlers::tour_requests::delete_tour_request)
            )
            .service(
                web::scope("/costs")
                    .service(handlers::costs::admin_list_costs)
                    .service(handlers::costs::create_cost)
                    .service(handlers::costs::update_cost)
                    .service(handlers::costs::delete_cost)
            )
            .service(
                web::scope("/uploads")
                    .service(handlers::uploads::upload_image)
            )
    );
}

/// 업로드 파일 제공 라우트를 설정합니다
fn configure_upload_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/uploads")
            .service(handlers::uploads::serve_upload)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "druk_travel_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
