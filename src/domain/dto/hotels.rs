//! 호텔 API 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::destinations::Coordinates;
use crate::utils::string_utils::deserialize_optional_string;

/// 위경도 좌표 요청 본문
#[derive(Debug, Deserialize, Validate)]
pub struct CoordinatesPayload {
    #[validate(range(min = -90.0, max = 90.0, message = "위도는 -90과 90 사이여야 합니다"))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "경도는 -180과 180 사이여야 합니다"))]
    pub lng: f64,
}

impl CoordinatesPayload {
    pub fn into_entity(self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// 호텔 생성/수정 요청 본문
#[derive(Debug, Deserialize, Validate)]
pub struct HotelPayload {
    #[validate(length(min = 1, max = 200, message = "이름은 1-200자 사이여야 합니다"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "소재지는 1-100자 사이여야 합니다"))]
    pub location: String,

    #[validate(nested)]
    pub coordinates: CoordinatesPayload,

    #[validate(length(min = 1, max = 10, message = "가격대 표기는 1-10자 사이여야 합니다"))]
    pub price_range: String,

    #[serde(default)]
    pub amenities: Vec<String>,

    #[validate(range(min = 0.0, max = 5.0, message = "평점은 0과 5 사이여야 합니다"))]
    pub rating: f32,

    #[serde(default)]
    pub gallery: Vec<String>,
}

/// 호텔 목록 필터
#[derive(Debug, Deserialize)]
pub struct HotelFilter {
    /// 소재지 필터 (예: "Paro")
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_out_of_range_rejected() {
        let payload = HotelPayload {
            name: "Gangtey Lodge".to_string(),
            location: "Phobjikha".to_string(),
            coordinates: CoordinatesPayload { lat: 27.45, lng: 90.16 },
            price_range: "$$$".to_string(),
            amenities: vec![],
            rating: 5.5,
            gallery: vec![],
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_nested_coordinates_validated() {
        let payload = HotelPayload {
            name: "Gangtey Lodge".to_string(),
            location: "Phobjikha".to_string(),
            coordinates: CoordinatesPayload { lat: 120.0, lng: 90.16 },
            price_range: "$$$".to_string(),
            amenities: vec![],
            rating: 4.8,
            gallery: vec![],
        };

        assert!(payload.validate().is_err());
    }
}
