//! # 목적지 HTTP 핸들러

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::destinations::DestinationPayload;
use crate::domain::dto::MessageResponse;
use crate::domain::models::pagination::PageQuery;
use crate::errors::errors::AppError;
use crate::services::destinations::DestinationService;

/// 공개 목적지 전체 목록 핸들러
///
/// 목적지는 수십 건 규모이므로 페이지네이션 없이 전체를 반환합니다.
///
/// # Endpoint
/// `GET /destinations`
#[get("")]
pub async fn list_destinations() -> Result<HttpResponse, AppError> {
    let service = DestinationService::instance();
    let destinations = service.list_all().await?;

    Ok(HttpResponse::Ok().json(destinations))
}

/// 공개 목적지 상세 핸들러
///
/// # Endpoint
/// `GET /destinations/{slug}`
#[get("/{slug}")]
pub async fn get_destination_by_slug(slug: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = DestinationService::instance();
    let destination = service.get_by_slug(&slug).await?;

    Ok(HttpResponse::Ok().json(destination))
}

/// 관리자 목적지 목록 핸들러 (페이지네이션)
#[get("")]
pub async fn admin_list_destinations(
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = DestinationService::instance();
    let page = service.list(&query).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// 목적지 생성 핸들러
#[post("")]
pub async fn create_destination(
    payload: web::Json<DestinationPayload>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = DestinationService::instance();
    let destination = service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(destination))
}

/// 목적지 업데이트 핸들러
#[put("/{id}")]
pub async fn update_destination(
    id: web::Path<String>,
    payload: web::Json<DestinationPayload>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = DestinationService::instance();
    let destination = service.update(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(destination))
}

/// 목적지 삭제 핸들러
#[delete("/{id}")]
pub async fn delete_destination(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = DestinationService::instance();
    service.delete(&id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("목적지가 삭제되었습니다")))
}
