//! # 여행자 문의 서비스 구현
//!
//! 공개 폼 제출과 관리자 검토 워크플로를 담당합니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    domain::dto::tour_requests::InquiryPayload,
    domain::entities::requests::{TourRequest, TourRequestStatus},
    domain::models::pagination::{Page, PageQuery},
    repositories::requests::TourRequestRepository,
};
use crate::errors::errors::AppError;

/// 여행자 문의 비즈니스 로직 서비스
#[service(name = "tourrequest")]
pub struct TourRequestService {
    /// 문의 데이터 액세스 리포지토리 (자동 주입)
    tour_request_repo: Arc<TourRequestRepository>,
}

impl TourRequestService {
    /// 공개 문의 제출
    ///
    /// 항상 `pending` 상태로 생성됩니다.
    pub async fn submit(&self, payload: InquiryPayload) -> Result<TourRequest, AppError> {
        let request = TourRequest::new(
            payload.name,
            payload.email,
            payload.phone,
            payload.country,
            payload.tour_slug,
            payload.message,
        );

        let created = self.tour_request_repo.create(request).await?;

        log::info!(
            "새 여행 문의 접수: {} <{}> (투어: {})",
            created.name,
            created.email,
            created.tour_slug.as_deref().unwrap_or("-")
        );

        Ok(created)
    }

    /// 검토 목록 조회 (최신 순, 상태 필터 선택)
    pub async fn list(
        &self,
        query: &PageQuery,
        status: Option<&str>,
    ) -> Result<Page<TourRequest>, AppError> {
        let status = match status {
            Some(status) => Some(TourRequestStatus::from_str(status)?),
            None => None,
        };

        let (requests, total) = self.tour_request_repo.list(query, status).await?;

        Ok(Page::new(requests, query, total))
    }

    /// ID로 문의 조회
    pub async fn get_by_id(&self, id: &str) -> Result<TourRequest, AppError> {
        self.tour_request_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("문의를 찾을 수 없습니다".to_string()))
    }

    /// 문의 상태 변경
    ///
    /// 상태 전이 제약은 없습니다. 관리자가 어떤 상태로든 바꿀 수 있습니다.
    pub async fn set_status(&self, id: &str, status: &str) -> Result<TourRequest, AppError> {
        let status = TourRequestStatus::from_str(status)?;

        let updated = self.tour_request_repo
            .set_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("문의를 찾을 수 없습니다".to_string()))?;

        log::info!("문의 상태 변경: {} → {}", id, status.as_str());

        Ok(updated)
    }

    /// 문의 삭제
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.tour_request_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("문의를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }
}
