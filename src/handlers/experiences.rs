//! # 체험 및 체험 유형 HTTP 핸들러

use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;
use crate::domain::dto::experiences::{ExperienceFilter, ExperiencePayload, ExperienceTypePayload};
use crate::domain::dto::MessageResponse;
use crate::errors::errors::AppError;
use crate::services::experiences::ExperienceService;

/// 공개 체험 유형 목록 핸들러 (표시 순서대로)
///
/// # Endpoint
/// `GET /experience-types`
#[get("")]
pub async fn list_experience_types() -> Result<HttpResponse, AppError> {
    let service = ExperienceService::instance();
    let types = service.list_types().await?;

    Ok(HttpResponse::Ok().json(types))
}

/// 공개 체험 목록 핸들러 (유형 필터 선택, 표시 순서대로)
///
/// # Endpoint
/// `GET /experiences?category=wellness-rejuvenation`
#[get("")]
pub async fn list_experiences(
    filter: web::Query<ExperienceFilter>,
) -> Result<HttpResponse, AppError> {
    let service = ExperienceService::instance();
    let experiences = service.list_experiences(filter.category.as_deref()).await?;

    Ok(HttpResponse::Ok().json(experiences))
}

/// 공개 체험 상세 핸들러
///
/// # Endpoint
/// `GET /experiences/{slug}`
#[get("/{slug}")]
pub async fn get_experience_by_slug(slug: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = ExperienceService::instance();
    let experience = service.get_by_slug(&slug).await?;

    Ok(HttpResponse::Ok().json(experience))
}

// --- 관리자: 체험 유형 ---

/// 관리자 체험 유형 목록 핸들러
#[get("")]
pub async fn admin_list_experience_types() -> Result<HttpResponse, AppError> {
    let service = ExperienceService::instance();
    let types = service.list_types().await?;

    Ok(HttpResponse::Ok().json(types))
}

/// 체험 유형 생성 핸들러
#[post("")]
pub async fn create_experience_type(
    payload: web::Json<ExperienceTypePayload>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ExperienceService::instance();
    let experience_type = service.create_type(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(experience_type))
}

/// 체험 유형 업데이트 핸들러
#[put("/{id}")]
pub async fn update_experience_type(
    id: web::Path<String>,
    payload: web::Json<ExperienceTypePayload>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ExperienceService::instance();
    let experience_type = service.update_type(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(experience_type))
}

/// 체험 유형 삭제 핸들러
#[delete("/{id}")]
pub async fn delete_experience_type(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = ExperienceService::instance();
    service.delete_type(&id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("체험 유형이 삭제되었습니다")))
}

// --- 관리자: 체험 ---

/// 관리자 체험 목록 핸들러 (유형 필터 선택)
#[get("")]
pub async fn admin_list_experiences(
    filter: web::Query<ExperienceFilter>,
) -> Result<HttpResponse, AppError> {
    let service = ExperienceService::instance();
    let experiences = service.list_experiences(filter.category.as_deref()).await?;

    Ok(HttpResponse::Ok().json(experiences))
}

/// 체험 생성 핸들러
#[post("")]
pub async fn create_experience(
    payload: web::Json<ExperiencePayload>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ExperienceService::instance();
    let experience = service.create_experience(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(experience))
}

/// 체험 업데이트 핸들러
#[put("/{id}")]
pub async fn update_experience(
    id: web::Path<String>,
    payload: web::Json<ExperiencePayload>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ExperienceService::instance();
    let experience = service.update_experience(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(experience))
}

/// 체험 삭제 핸들러
#[delete("/{id}")]
pub async fn delete_experience(id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = ExperienceService::instance();
    service.delete_experience(&id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("체험이 삭제되었습니다")))
}
