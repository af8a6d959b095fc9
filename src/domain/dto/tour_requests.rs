//! 여행자 문의 API 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// 공개 문의 폼 제출 본문
#[derive(Debug, Deserialize, Validate)]
pub struct InquiryPayload {
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub country: Option<String>,

    /// 투어 상세 페이지에서 문의한 경우 해당 투어 슬러그
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub tour_slug: Option<String>,

    #[validate(length(min = 10, max = 5000, message = "문의 내용은 10-5000자 사이여야 합니다"))]
    pub message: String,
}

/// 문의 상태 변경 요청 본문
///
/// 상태 값은 서비스 계층에서 [`TourRequestStatus::from_str`] 파싱을 거칩니다.
///
/// [`TourRequestStatus::from_str`]: crate::domain::entities::requests::TourRequestStatus::from_str
#[derive(Debug, Deserialize, Validate)]
pub struct InquiryStatusPayload {
    #[validate(length(min = 1, message = "상태는 필수입니다"))]
    pub status: String,
}

/// 문의 목록 필터
#[derive(Debug, Deserialize)]
pub struct InquiryFilter {
    /// 상태 필터 ("pending" 등)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inquiry_requires_valid_email() {
        let payload = InquiryPayload {
            name: "Sonam".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            country: None,
            tour_slug: None,
            message: "We would like to visit during Thimphu Tshechu.".to_string(),
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_inquiry_requires_minimum_message() {
        let payload = InquiryPayload {
            name: "Sonam".to_string(),
            email: "sonam@example.com".to_string(),
            phone: None,
            country: None,
            tour_slug: None,
            message: "Hi".to_string(),
        };

        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_empty_optional_fields_become_none() {
        let json = r#"{
            "name": "Sonam",
            "email": "sonam@example.com",
            "phone": "",
            "country": "   ",
            "message": "We would like to visit during Thimphu Tshechu."
        }"#;

        let payload: InquiryPayload = serde_json::from_str(json).unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.phone, None);
        assert_eq!(payload.country, None);
    }
}
