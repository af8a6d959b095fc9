//! # 전역 비용 HTTP 핸들러

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::costs::GlobalCostPayload;
use crate::domain::dto::MessageResponse;
use crate::errors::errors::AppError;
use crate::services::costs::GlobalCostService;

/// 공개 비용 목록 핸들러 (가격 페이지용)
///
/// # Endpoint
/// `GET /costs`
#[get("")]
pub async fn list_costs() -> Result<HttpResponse, AppError> {
    let service = GlobalCostService::instance();
    let costs = service.list_all().await?;

    Ok(HttpResponse::Ok().json(costs))
}

/// 관리자 비용 목록 핸들러
#[get("")]
pub async fn admin_list_costs() -> Result<HttpResponse, AppError> {
    let service = GlobalCostService::instance();
    let costs = service.list_all().await?;

    Ok(HttpResponse::Ok().json(costs))
}

/// 비용 항목 생성 핸들러
#[post("")]
pub async fn create_cost(payload: web::Json<GlobalCostPayload>) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = GlobalCostService::instance();
    let cost = service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(cost))
}

/// 비용 항목 업데이트 핸들러
#[put("/{id}")]
pub async fn update_cost(
    id: web::Path<String>,
    payload: web::Json<GlobalCostPayload>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = GlobalCostService::instance();
    let cost = service.update(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(cost))
}

/// 비용 항목 삭제 핸들러
#[delete("/{id}")]
pub async fn delete_cost(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = GlobalCostService::instance();
    service.delete(&id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("비용 항목이 삭제되었습니다")))
}
