//! # 여행자 문의 HTTP 핸들러
//!
//! 공개 폼 제출(`POST /api/v1/tour-requests`)과 관리자 검토 워크플로
//! (`/api/v1/admin/tour-requests`)를 제공합니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::tour_requests::{InquiryFilter, InquiryPayload, InquiryStatusPayload};
use crate::domain::dto::MessageResponse;
use crate::domain::models::pagination::PageQuery;
use crate::errors::errors::AppError;
use crate::services::requests::TourRequestService;

/// 공개 문의 제출 핸들러
///
/// # Endpoint
/// `POST /tour-requests`
#[post("")]
pub async fn submit_tour_request(
    payload: web::Json<InquiryPayload>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = TourRequestService::instance();
    let request = service.submit(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(request))
}

/// 관리자 문의 목록 핸들러 (최신 순, 상태 필터 선택)
///
/// # Endpoint
/// `GET /tour-requests?status=pending&page=1`
#[get("")]
pub async fn list_tour_requests(
    query: web::Query<PageQuery>,
    filter: web::Query<InquiryFilter>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = TourRequestService::instance();
    let page = service.list(&query, filter.status.as_deref()).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// 관리자 문의 상세 핸들러
#[get("/{id}")]
pub async fn get_tour_request(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = TourRequestService::instance();
    let request = service.get_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(request))
}

/// 문의 상태 변경 핸들러
///
/// # Endpoint
/// `PUT /tour-requests/{id}/status` (body: `{"status": "approved"}`)
#[put("/{id}/status")]
pub async fn update_tour_request_status(
    id: web::Path<String>,
    payload: web::Json<InquiryStatusPayload>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = TourRequestService::instance();
    let request = service.set_status(&id, &payload.status).await?;

    Ok(HttpResponse::Ok().json(request))
}

/// 문의 삭제 핸들러
#[delete("/{id}")]
pub async fn delete_tour_request(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = TourRequestService::instance();
    service.delete(&id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("문의가 삭제되었습니다")))
}
