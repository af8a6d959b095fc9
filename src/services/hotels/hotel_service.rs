//! # 호텔 서비스 구현

use std::sync::Arc;
use mongodb::bson::{doc, to_bson, DateTime};
use singleton_macro::service;
use crate::{
    domain::dto::hotels::HotelPayload,
    domain::entities::hotels::Hotel,
    domain::models::pagination::{Page, PageQuery},
    repositories::hotels::HotelRepository,
};
use crate::errors::errors::AppError;

/// 호텔 비즈니스 로직 서비스
#[service(name = "hotel")]
pub struct HotelService {
    /// 호텔 데이터 액세스 리포지토리 (자동 주입)
    hotel_repo: Arc<HotelRepository>,
}

impl HotelService {
    /// 페이지네이션 목록 조회 (소재지 필터 선택)
    pub async fn list(
        &self,
        query: &PageQuery,
        location: Option<&str>,
    ) -> Result<Page<Hotel>, AppError> {
        let (hotels, total) = self.hotel_repo.list(query, location).await?;

        Ok(Page::new(hotels, query, total))
    }

    /// ID로 호텔 조회
    pub async fn get_by_id(&self, id: &str) -> Result<Hotel, AppError> {
        self.hotel_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("호텔을 찾을 수 없습니다".to_string()))
    }

    /// 새 호텔 생성
    pub async fn create(&self, payload: HotelPayload) -> Result<Hotel, AppError> {
        let hotel = Hotel::new(
            payload.name,
            payload.location,
            payload.coordinates.into_entity(),
            payload.price_range,
            payload.amenities,
            payload.rating,
            payload.gallery,
        );

        let created = self.hotel_repo.create(hotel).await?;

        log::info!("호텔 생성됨: {} ({})", created.name, created.location);

        Ok(created)
    }

    /// 호텔 전체 업데이트
    pub async fn update(&self, id: &str, payload: HotelPayload) -> Result<Hotel, AppError> {
        let coordinates = to_bson(&payload.coordinates.into_entity())
            .map_err(|e| AppError::InternalError(format!("좌표 직렬화 실패: {}", e)))?;
        let amenities = to_bson(&payload.amenities)
            .map_err(|e| AppError::InternalError(format!("편의시설 직렬화 실패: {}", e)))?;
        let gallery = to_bson(&payload.gallery)
            .map_err(|e| AppError::InternalError(format!("갤러리 직렬화 실패: {}", e)))?;

        let update_doc = doc! {
            "name": &payload.name,
            "location": &payload.location,
            "coordinates": coordinates,
            "price_range": &payload.price_range,
            "amenities": amenities,
            "rating": payload.rating as f64,
            "gallery": gallery,
            "updated_at": DateTime::now(),
        };

        self.hotel_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("호텔을 찾을 수 없습니다".to_string()))
    }

    /// 호텔 삭제
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.hotel_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("호텔을 찾을 수 없습니다".to_string()));
        }

        log::info!("호텔 삭제됨: {}", id);

        Ok(())
    }
}
