//! # 투어 서비스 구현
//!
//! 투어 콘텐츠의 비즈니스 로직 계층입니다. 슬러그 생성/충돌 검사와
//! 업데이트 문서 구성을 담당하고, 저장은 리포지토리에 위임합니다.

use std::sync::Arc;
use mongodb::bson::{doc, to_bson, DateTime};
use singleton_macro::service;
use crate::{
    domain::dto::tours::TourPayload,
    domain::entities::tours::Tour,
    domain::models::pagination::{Page, PageQuery},
    repositories::tours::TourRepository,
    utils::string_utils::slugify,
};
use crate::errors::errors::AppError;

/// 투어 비즈니스 로직 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며,
/// TourRepository가 자동으로 주입됩니다.
///
/// ```rust,ignore
/// let tour_service = TourService::instance(); // 항상 동일한 인스턴스
/// ```
#[service(name = "tour")]
pub struct TourService {
    /// 투어 데이터 액세스 리포지토리 (자동 주입)
    tour_repo: Arc<TourRepository>,
}

impl TourService {
    /// 페이지네이션 목록 조회
    ///
    /// 공개 사이트의 투어 목록 페이지와 관리자 패널 목록이 공용합니다.
    pub async fn list(
        &self,
        query: &PageQuery,
        category: Option<&str>,
    ) -> Result<Page<Tour>, AppError> {
        let (tours, total) = self.tour_repo.list(query, category).await?;

        Ok(Page::new(tours, query, total))
    }

    /// 슬러그로 투어 조회
    pub async fn get_by_slug(&self, slug: &str) -> Result<Tour, AppError> {
        self.tour_repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("투어를 찾을 수 없습니다: {}", slug)))
    }

    /// ID로 투어 조회 (관리자 수정 폼용)
    pub async fn get_by_id(&self, id: &str) -> Result<Tour, AppError> {
        self.tour_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("투어를 찾을 수 없습니다".to_string()))
    }

    /// 새 투어 생성
    ///
    /// 슬러그가 생략되면 제목에서 생성합니다. 슬러그 충돌은
    /// 리포지토리에서 ConflictError로 반환됩니다.
    pub async fn create(&self, payload: TourPayload) -> Result<Tour, AppError> {
        let slug = resolve_slug(payload.slug.as_deref(), &payload.title)?;

        let tour = Tour::new(
            slug,
            payload.title,
            payload.description,
            payload.image,
            payload.category,
            payload.price,
            payload.duration_days,
            payload.itinerary.into_iter().map(|day| day.into_entity()).collect(),
        );

        let created = self.tour_repo.create(tour).await?;

        log::info!("투어 생성됨: {} ({})", created.title, created.slug);

        Ok(created)
    }

    /// 투어 전체 업데이트
    ///
    /// 관리자 폼은 항상 전체 문서를 전송하므로 모든 콘텐츠 필드를
    /// `$set`으로 교체합니다. 다른 투어가 쓰는 슬러그로 변경하면 409입니다.
    pub async fn update(&self, id: &str, payload: TourPayload) -> Result<Tour, AppError> {
        let slug = resolve_slug(payload.slug.as_deref(), &payload.title)?;

        // 다른 문서와의 슬러그 충돌 검사
        if let Some(existing) = self.tour_repo.find_by_slug(&slug).await? {
            if existing.id_string().as_deref() != Some(id) {
                return Err(AppError::ConflictError(
                    format!("이미 사용 중인 슬러그입니다: {}", slug)
                ));
            }
        }

        let itinerary: Vec<_> = payload.itinerary.into_iter().map(|day| day.into_entity()).collect();
        let itinerary_bson = to_bson(&itinerary)
            .map_err(|e| AppError::InternalError(format!("일정 직렬화 실패: {}", e)))?;

        let update_doc = doc! {
            "slug": &slug,
            "title": &payload.title,
            "description": &payload.description,
            "image": payload.image.as_deref(),
            "category": &payload.category,
            "price": payload.price,
            "duration_days": payload.duration_days as i64,
            "itinerary": itinerary_bson,
            "updated_at": DateTime::now(),
        };

        self.tour_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("투어를 찾을 수 없습니다".to_string()))
    }

    /// 투어 삭제
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.tour_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("투어를 찾을 수 없습니다".to_string()));
        }

        log::info!("투어 삭제됨: {}", id);

        Ok(())
    }
}

/// 명시된 슬러그를 쓰거나 제목에서 생성합니다.
///
/// 슬러그화 결과가 빈 문자열이면 (기호로만 이루어진 제목 등) 400입니다.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_slug_from_title() {
        assert_eq!(resolve_slug(None, "Wellness & Rejuvenation!").unwrap(), "wellness-rejuvenation");
    }

    #[test]
    fn test_resolve_slug_prefers_explicit() {
        assert_eq!(resolve_slug(Some("Custom Slug"), "Some Title").unwrap(), "custom-slug");
    }

    #[test]
    fn test_resolve_slug_rejects_symbol_only() {
        assert!(resolve_slug(None, "!!!").is_err());
        assert!(resolve_slug(Some("???"), "Good Title").is_err());
    }
}
