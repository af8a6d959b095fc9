//! Hotel Entity Implementation
//!
//! 숙소 페이지에서 사용하는 호텔 엔티티입니다.
//! 다른 콘텐츠와 달리 슬러그 없이 ObjectId로 조회됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::destinations::Coordinates;

/// 호텔 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 호텔 이름
    pub name: String,
    /// 소재지 (마을/도시 이름)
    pub location: String,
    /// 지도 마커 좌표
    pub coordinates: Coordinates,
    /// 가격대 표기 (예: "$$", "$$$")
    pub price_range: String,
    /// 편의시설 목록
    pub amenities: Vec<String>,
    /// 평점 (0.0 - 5.0)
    pub rating: f32,
    /// 갤러리 이미지 (업로드 파일명 목록)
    pub gallery: Vec<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Hotel {
    pub fn new(
        name: String,
        location: String,
        coordinates: Coordinates,
        price_range: String,
        amenities: Vec<String>,
        rating: f32,
        gallery: Vec<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            location,
            coordinates,
            price_range,
            amenities,
            rating,
            gallery,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.map(|oid| oid.to_hex())
    }
}
