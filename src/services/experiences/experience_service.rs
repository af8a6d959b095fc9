//! # 체험 서비스 구현
//!
//! 체험과 체험 유형 두 컬렉션의 비즈니스 로직을 한 서비스에서 다룹니다.
//! 체험 페이지는 두 컬렉션을 항상 함께 렌더링하기 때문입니다.
//! `category`는 체험 유형 슬러그에 대한 애플리케이션 수준 참조이며,
//! 참조 무결성은 강제하지 않습니다 (원본 시스템과 동일).

use std::sync::Arc;
use mongodb::bson::{doc, DateTime};
use singleton_macro::service;
use crate::{
    domain::dto::experiences::{ExperiencePayload, ExperienceTypePayload},
    domain::entities::experiences::{Experience, ExperienceType},
    repositories::experiences::{ExperienceRepository, ExperienceTypeRepository},
    utils::string_utils::slugify,
};
use crate::errors::errors::AppError;

/// 체험 및 체험 유형 비즈니스 로직 서비스
#[service(name = "experience")]
pub struct ExperienceService {
    /// 체험 데이터 액세스 리포지토리 (자동 주입)
    experience_repo: Arc<ExperienceRepository>,
    /// 체험 유형 데이터 액세스 리포지토리 (자동 주입)
    experience_type_repo: Arc<ExperienceTypeRepository>,
}

impl ExperienceService {
    // --- 체험 유형 ---

    /// 체험 유형 전체 목록 (order 오름차순)
    pub async fn list_types(&self) -> Result<Vec<ExperienceType>, AppError> {
        self.experience_type_repo.list_all().await
    }

    /// 새 체험 유형 생성
    pub async fn create_type(&self, payload: ExperienceTypePayload) -> Result<ExperienceType, AppError> {
        let slug = resolve_slug(payload.slug.as_deref(), &payload.title)?;

        let experience_type = ExperienceType::new(slug, payload.title, payload.order);

        self.experience_type_repo.create(experience_type).await
    }

    /// 체험 유형 전체 업데이트
    pub async fn update_type(&self, id: &str, payload: ExperienceTypePayload) -> Result<ExperienceType, AppError> {
        let slug = resolve_slug(payload.slug.as_deref(), &payload.title)?;

        let update_doc = doc! {
            "slug": &slug,
            "title": &payload.title,
            "order": payload.order,
            "updated_at": DateTime::now(),
        };

        self.experience_type_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("체험 유형을 찾을 수 없습니다".to_string()))
    }

    /// 체험 유형 삭제
    pub async fn delete_type(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.experience_type_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("체험 유형을 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    // --- 체험 ---

    /// 체험 목록 (유형 필터 선택, order 오름차순)
    pub async fn list_experiences(&self, category: Option<&str>) -> Result<Vec<Experience>, AppError> {
        self.experience_repo.list_all(category).await
    }

    /// 슬러그로 체험 조회
    pub async fn get_by_slug(&self, slug: &str) -> Result<Experience, AppError> {
        self.experience_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("체험을 찾을 수 없습니다: {}", slug)))
    }

    /// 새 체험 생성
    pub async fn create_experience(&self, payload: ExperiencePayload) -> Result<Experience, AppError> {
        let slug = resolve_slug(payload.slug.as_deref(), &payload.title)?;

        let experience = Experience::new(
            slug,
            payload.title,
            payload.description,
            payload.image,
            payload.category,
            payload.order,
        );

        let created = self.experience_repo.create(experience).await?;

        log::info!("체험 생성됨: {} ({})", created.title, created.slug);

        Ok(created)
    }

    /// 체험 전체 업데이트
    pub async fn update_experience(&self, id: &str, payload: ExperiencePayload) -> Result<Experience, AppError> {
        let slug = resolve_slug(payload.slug.as_deref(), &payload.title)?;

        if let Some(existing) = self.experience_repo.find_by_slug(&slug).await? {
            let existing_id = existing.id.map(|oid| oid.to_hex());
            if existing_id.as_deref() != Some(id) {
                return Err(AppError::ConflictError(
                    format!("이미 사용 중인 슬러그입니다: {}", slug)
                ));
            }
        }

        let update_doc = doc! {
            "slug": &slug,
            "title": &payload.title,
            "description": &payload.description,
            "image": payload.image.as_deref(),
            "category": &payload.category,
            "order": payload.order,
            "updated_at": DateTime::now(),
        };

        self.experience_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("체험을 찾을 수 없습니다".to_string()))
    }

    /// 체험 삭제
    pub async fn delete_experience(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.experience_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("체험을 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }
}

/// 명시된 슬러그를 쓰거나 제목에서 생성합니다.
fn resolve_slug(explicit: Option<&str>, title: &str) -> Result<String, AppError> {
    let slug = match explicit {
        Some(slug) => slugify(slug),
        None => slugify(title),
    };

    if slug.is_empty() {
        return Err(AppError::ValidationError(
            "슬러그를 생성할 수 없습니다. 영숫자가 포함된 제목이나 슬러그를 입력해주세요".to_string()
        ));
    }

    Ok(slug)
}
