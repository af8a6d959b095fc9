//! # 호텔 HTTP 핸들러
//!
//! 공개 조회(`/api/v1/hotels`)와 관리자 CRUD(`/api/v1/admin/hotels`)를
//! 제공합니다. 호텔은 ObjectId로 조회됩니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::hotels::{HotelFilter, HotelPayload};
use crate::domain::dto::MessageResponse;
use crate::domain::models::pagination::PageQuery;
use crate::errors::errors::AppError;
use crate::services::hotels::HotelService;

/// 공개 호텔 목록 핸들러
///
/// # Endpoint
/// `GET /hotels?page=1&page_size=12&location=Paro`
#[get("")]
pub async fn list_hotels(
    query: web::Query<PageQuery>,
    filter: web::Query<HotelFilter>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = HotelService::instance();
    let page = service.list(&query, filter.location.as_deref()).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// 공개 호텔 상세 핸들러
///
/// 잘못된 ObjectId 형식은 400, 존재하지 않는 호텔은 404입니다.
///
/// # Endpoint
/// `GET /hotels/{id}`
#[get("/{id}")]
pub async fn get_hotel_by_id(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = HotelService::instance();
    let hotel = service.get_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(hotel))
}

/// 관리자 호텔 목록 핸들러
#[get("")]
pub async fn admin_list_hotels(
    query: web::Query<PageQuery>,
    filter: web::Query<HotelFilter>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = HotelService::instance();
    let page = service.list(&query, filter.location.as_deref()).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// 호텔 생성 핸들러
#[post("")]
pub async fn create_hotel(payload: web::Json<HotelPayload>) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = HotelService::instance();
    let hotel = service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(hotel))
}

/// 호텔 업데이트 핸들러
#[put("/{id}")]
pub async fn update_hotel(
    id: web::Path<String>,
    payload: web::Json<HotelPayload>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = HotelService::instance();
    let hotel = service.update(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(hotel))
}

/// 호텔 삭제 핸들러
#[delete("/{id}")]
pub async fn delete_hotel(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = HotelService::instance();
    service.delete(&id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("호텔이 삭제되었습니다")))
}
