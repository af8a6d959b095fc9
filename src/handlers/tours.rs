//! # 투어 HTTP 핸들러
//!
//! 공개 조회 엔드포인트와 관리자 CRUD 엔드포인트를 제공합니다.
//!
//! ## 공개 엔드포인트 (`/api/v1/tours`)
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/tours` | 페이지네이션 목록 (카테고리 필터 선택) |
//! | `GET` | `/tours/{slug}` | 슬러그로 조회 |
//!
//! ## 관리자 엔드포인트 (`/api/v1/admin/tours`, 세션 필요)
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/tours` | 관리자 목록 | 200 OK |
//! | `GET` | `/tours/{id}` | ID로 조회 (수정 폼) | 200 OK |
//! | `POST` | `/tours` | 새 투어 생성 | 201 Created |
//! | `PUT` | `/tours/{id}` | 전체 업데이트 | 200 OK |
//! | `DELETE` | `/tours/{id}` | 삭제 | 200 OK |

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::tours::{TourFilter, TourPayload};
use crate::domain::dto::MessageResponse;
use crate::domain::models::pagination::PageQuery;
use crate::errors::errors::AppError;
use crate::services::tours::TourService;

/// 공개 투어 목록 핸들러
///
/// # Endpoint
/// `GET /tours?page=1&page_size=12&category=trekking`
#[get("")]
pub async fn list_tours(
    query: web::Query<PageQuery>,
    filter: web::Query<TourFilter>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = TourService::instance();
    let page = service.list(&query, filter.category.as_deref()).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// 공개 투어 상세 핸들러
///
/// # Endpoint
/// `GET /tours/{slug}`
#[get("/{slug}")]
pub async fn get_tour_by_slug(slug: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = TourService::instance();
    let tour = service.get_by_slug(&slug).await?;

    Ok(HttpResponse::Ok().json(tour))
}

/// 관리자 투어 목록 핸들러
#[get("")]
pub async fn admin_list_tours(
    query: web::Query<PageQuery>,
    filter: web::Query<TourFilter>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = TourService::instance();
    let page = service.list(&query, filter.category.as_deref()).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// 관리자 투어 단건 조회 핸들러 (수정 폼용)
#[get("/{id}")]
pub async fn admin_get_tour(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = TourService::instance();
    let tour = service.get_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(tour))
}

/// 투어 생성 핸들러
#[post("")]
pub async fn create_tour(payload: web::Json<TourPayload>) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = TourService::instance();
    let tour = service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(tour))
}

/// 투어 업데이트 핸들러
#[put("/{id}")]
pub async fn update_tour(
    id: web::Path<String>,
    payload: web::Json<TourPayload>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = TourService::instance();
    let tour = service.update(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(tour))
}

/// 투어 삭제 핸들러
#[delete("/{id}")]
pub async fn delete_tour(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = TourService::instance();
    service.delete(&id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("투어가 삭제되었습니다")))
}
