//! # 이동 시간 조회 HTTP 핸들러
//!
//! 정적 인접 테이블 기반의 지점 간 이동 시간 조회 엔드포인트입니다.
//! 수록되지 않은 구간은 오류가 아니라 `minutes: 0`으로 응답합니다.

use actix_web::{get, web, HttpResponse};
use serde::Deserialize;
use crate::domain::dto::TravelTimeResponse;
use crate::domain::models::travel_times::travel_time_minutes;
use crate::errors::errors::AppError;

/// 이동 시간 조회 쿼리
#[derive(Debug, Deserialize)]
pub struct TravelTimeQuery {
    pub from: String,
    pub to: String,
}

/// 이동 시간 조회 핸들러
///
/// # Endpoint
/// `GET /travel-times?from=Paro&to=Thimphu`
#[get("")]
pub async fn get_travel_time(
    query: web::Query<TravelTimeQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let minutes = travel_time_minutes(&query.from, &query.to);

    Ok(HttpResponse::Ok().json(TravelTimeResponse {
        from: query.from,
        to: query.to,
        minutes,
    }))
}
