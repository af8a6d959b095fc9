//! # 관리자 인증 HTTP 핸들러
//!
//! 로그인/로그아웃은 공개 엔드포인트이고, `/me`는 세션 미들웨어 뒤에
//! 있습니다. 세션은 HTTP-only 쿠키로만 전달됩니다.

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::config::{Environment, SessionConfig};
use crate::domain::dto::auth::LoginRequest;
use crate::domain::dto::MessageResponse;
use crate::errors::errors::AppError;
use crate::services::auth::AdminAuthService;

/// 관리자 로그인 핸들러
///
/// 성공 시 `admin_session` HTTP-only 쿠키(1주 만료)를 설정합니다.
/// 실패는 401 에러 객체로 반환됩니다.
///
/// # Endpoint
/// `POST /api/v1/auth/login`
#[post("/login")]
pub async fn admin_login(payload: web::Json<LoginRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = AdminAuthService::instance();
    let (response, token) = service.login(payload.into_inner()).await?;

    let cookie = session_cookie(token, SessionConfig::ttl_seconds());

    Ok(HttpResponse::Ok().cookie(cookie).json(response))
}

/// 관리자 로그아웃 핸들러
///
/// 만료된 빈 쿠키를 내려보내 세션을 제거합니다.
///
/// # Endpoint
/// `POST /api/v1/auth/logout`
#[post("/logout")]
pub async fn admin_logout() -> Result<HttpResponse, AppError> {
    let cookie = session_cookie(String::new(), 0);

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(MessageResponse::new("로그아웃되었습니다")))
}

/// 현재 관리자 프로필 핸들러 (세션 필요)
///
/// # Endpoint
/// `GET /api/v1/admin/auth/me`
#[get("/me")]
pub async fn admin_me() -> Result<HttpResponse, AppError> {
    let service = AdminAuthService::instance();
    let profile = service.me().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "email": profile.email,
        "username": profile.username,
        "role": profile.role,
        "last_login_at": profile.last_login_at,
    })))
}

/// 세션 쿠키 구성
///
/// 운영 환경에서만 Secure 플래그를 켭니다 (로컬 개발은 http).
fn session_cookie(value: String, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(SessionConfig::COOKIE_NAME, value)
        .path("/")
        .http_only(true)
        .secure(Environment::current() == Environment::Production)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}
