//! 관리자 세션 미들웨어
//!
//! `/admin` 라우트 전체를 보호하는 쿠키 기반 인증 게이트입니다.
//! `admin_session` 쿠키의 서명과 만료를 검증하고, 유효하지 않으면
//! 401 JSON 응답으로 요청을 차단합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/admin")
//!         .wrap(AdminSessionMiddleware::required())
//!         .service(handlers::tours::admin_create_tour)
//! );
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::session_inner::AdminSessionMiddlewareService;

/// 관리자 세션 인증 미들웨어
pub struct AdminSessionMiddleware;

impl AdminSessionMiddleware {
    /// 필수 인증 미들웨어 생성
    ///
    /// 유효한 `admin_session` 쿠키가 없는 모든 요청을 401로 차단합니다.
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AdminSessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AdminSessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminSessionMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
