//! 관리자 세션 검증 로직
//!
//! [`AdminSessionMiddleware`]가 생성하는 실제 서비스 구현입니다.
//! 쿠키 추출과 토큰 검증을 수행하고, 검증된 세션을 Request Extensions에
//! 저장하여 핸들러가 조회할 수 있게 합니다.
//!
//! [`AdminSessionMiddleware`]: crate::middlewares::session_middleware::AdminSessionMiddleware

use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::config::SessionConfig;
use crate::domain::models::session::AdminSession;
use crate::errors::errors::AppError;

/// 실제 세션 검증을 수행하는 서비스
pub struct AdminSessionMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AdminSessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match extract_session_from_request(&req) {
                Err(err) => {
                    log::warn!("관리자 세션 검증 실패: {}", err);
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({
                            "error": "authentication_required",
                            "message": "유효한 관리자 세션이 필요합니다"
                        }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    Ok(res)
                }
                Ok(session) => {
                    // 세션 정보를 Request Extensions에 저장
                    req.extensions_mut().insert(session);
                    log::debug!("관리자 세션 검증 성공");

                    // 다음 서비스로 요청 전달
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
            }
        })
    }
}

/// 요청에서 세션 쿠키를 추출하고 검증
fn extract_session_from_request(req: &ServiceRequest) -> Result<AdminSession, AppError> {
    let cookie = req
        .cookie(SessionConfig::COOKIE_NAME)
        .ok_or_else(|| AppError::AuthenticationError("세션 쿠키가 없습니다".to_string()))?;

    AdminSession::verify(cookie.value(), &SessionConfig::secret())
}
