//! 투어 API 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::domain::entities::tours::ItineraryDay;
use crate::utils::string_utils::deserialize_optional_string;

/// 투어 생성/수정 요청 본문
///
/// 생성과 수정 모두 전체 문서를 전송합니다 (부분 업데이트 없음).
/// `slug`를 생략하면 제목에서 자동 생성됩니다.
#[derive(Debug, Deserialize, Validate)]
pub struct TourPayload {
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: String,

    /// 생략 시 제목에서 슬러그를 생성합니다.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub slug: Option<String>,

    #[validate(length(min = 1, message = "설명은 필수입니다"))]
    pub description: String,

    /// 업로드된 대표 이미지 파일명
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image: Option<String>,

    #[validate(length(min = 1, max = 50, message = "카테고리는 1-50자 사이여야 합니다"))]
    pub category: String,

    #[validate(range(min = 0.0, message = "가격은 0 이상이어야 합니다"))]
    pub price: f64,

    #[validate(range(min = 1, max = 60, message = "일정은 1-60일 사이여야 합니다"))]
    pub duration_days: u32,

    #[serde(default)]
    #[validate(nested)]
    pub itinerary: Vec<ItineraryDayPayload>,
}

/// 일차별 일정 항목
#[derive(Debug, Deserialize, Validate)]
pub struct ItineraryDayPayload {
    #[validate(range(min = 1, message = "일차는 1 이상이어야 합니다"))]
    pub day: u32,

    #[validate(length(min = 1, message = "일차 제목은 필수입니다"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub overnight: Option<String>,
}

impl ItineraryDayPayload {
    pub fn into_entity(self) -> ItineraryDay {
        ItineraryDay {
            day: self.day,
            title: self.title,
            description: self.description,
            overnight: self.overnight,
        }
    }
}

/// 투어 목록 필터
#[derive(Debug, Deserialize)]
pub struct TourFilter {
    /// 카테고리 필터 (예: "trekking")
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_validation_rejects_empty_title() {
        let payload = TourPayload {
            title: "".to_string(),
            slug: None,
            description: "A trek".to_string(),
            image: None,
            category: "trekking".to_string(),
            price: 2400.0,
            duration_days: 7,
            itinerary: vec![],
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_payload_validation_rejects_negative_price() {
        let payload = TourPayload {
            title: "Druk Path Trek".to_string(),
            slug: None,
            description: "A trek".to_string(),
            image: None,
            category: "trekking".to_string(),
            price: -1.0,
            duration_days: 7,
            itinerary: vec![],
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_payload_deserializes_with_defaults() {
        let json = r#"{
            "title": "Druk Path Trek",
            "description": "Classic five day trek from Paro to Thimphu.",
            "category": "trekking",
            "price": 2400,
            "duration_days": 5
        }"#;

        let payload: TourPayload = serde_json::from_str(json).unwrap();
        assert!(payload.validate().is_ok());
        assert!(payload.slug.is_none());
        assert!(payload.itinerary.is_empty());
    }
}
