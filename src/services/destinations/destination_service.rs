//! # 목적지 서비스 구현

use std::sync::Arc;
use mongodb::bson::{doc, to_bson, DateTime};
use singleton_macro::service;
use crate::{
    domain::dto::destinations::DestinationPayload,
    domain::entities::destinations::Destination,
    domain::models::pagination::{Page, PageQuery},
    repositories::destinations::DestinationRepository,
    utils::string_utils::slugify,
};
use crate::errors::errors::AppError;

/// 목적지 비즈니스 로직 서비스
#[service(name = "destination")]
pub struct DestinationService {
    /// 목적지 데이터 액세스 리포지토리 (자동 주입)
    destination_repo: Arc<DestinationRepository>,
}

impl DestinationService {
    /// 전체 목록 조회 (공개 지도/목록 페이지용)
    pub async fn list_all(&self) -> Result<Vec<Destination>, AppError> {
        self.destination_repo.list_all().await
    }

    /// 페이지네이션 목록 조회 (관리자 패널용)
    pub async fn list(&self, query: &PageQuery) -> Result<Page<Destination>, AppError> {
        let (destinations, total) = self.destination_repo.list(query).await?;

        Ok(Page::new(destinations, query, total))
    }

    /// 슬러그로 목적지 조회
    pub async fn get_by_slug(&self, slug: &str) -> Result<Destination, AppError> {
        self.destination_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("목적지를 찾을 수 없습니다: {}", slug)))
    }

    /// 새 목적지 생성
    pub async fn create(&self, payload: DestinationPayload) -> Result<Destination, AppError> {
        let slug = resolve_slug(payload.slug.as_deref(), &payload.name)?;

        let destination = Destination::new(
            slug,
            payload.name,
            payload.coordinates.into_entity(),
            payload.region,
        );

        let created = self.destination_repo.create(destination).await?;

        log::info!("목적지 생성됨: {} ({})", created.name, created.slug);

        Ok(created)
    }

    /// 목적지 전체 업데이트
    pub async fn update(&self, id: &str, payload: DestinationPayload) -> Result<Destination, AppError> {
        let slug = resolve_slug(payload.slug.as_deref(), &payload.name)?;

        if let Some(existing) = self.destination_repo.find_by_slug(&slug).await? {
            if existing.id_string().as_deref() != Some(id) {
                return Err(AppError::ConflictError(
                    format!("이미 사용 중인 슬러그입니다: {}", slug)
                ));
            }
        }

        let coordinates = to_bson(&payload.coordinates.into_entity())
            .map_err(|e| AppError::InternalError(format!("좌표 직렬화 실패: {}", e)))?;
        let region = to_bson(&payload.region)
            .map_err(|e| AppError::InternalError(format!("지역 직렬화 실패: {}", e)))?;

        let update_doc = doc! {
            "slug": &slug,
            "name": &payload.name,
            "coordinates": coordinates,
            "region": region,
            "updated_at": DateTime::now(),
        };

        self.destination_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("목적지를 찾을 수 없습니다".to_string()))
    }

    /// 목적지 삭제
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.destination_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("목적지를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }
}

/// 명시된 슬러그를 쓰거나 이름에서 생성합니다.
fn resolve_slug(explicit: Option<&str>, name: &str) -> Result<String, AppError> {
    let slug = match explicit {
        Some(slug) => slugify(slug),
        None => slugify(name),
    };

    if slug.is_empty() {
        return Err(AppError::ValidationError(
            "슬러그를 생성할 수 없습니다. 영숫자가 포함된 이름이나 슬러그를 입력해주세요".to_string()
        ));
    }

    Ok(slug)
}
