//! 전역 비용 API 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// 전역 비용 항목 생성/수정 요청 본문
#[derive(Debug, Deserialize, Validate)]
pub struct GlobalCostPayload {
    /// 항목 식별자 (예: "sdf_adult")
    #[validate(length(min = 1, max = 50, message = "키는 1-50자 사이여야 합니다"))]
    pub key: String,

    #[validate(length(min = 1, max = 200, message = "레이블은 1-200자 사이여야 합니다"))]
    pub label: String,

    #[validate(range(min = 0.0, message = "금액은 0 이상이어야 합니다"))]
    pub amount: f64,

    /// ISO 4217 통화 코드
    #[validate(length(equal = 3, message = "통화 코드는 3자여야 합니다"))]
    pub currency: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub notes: Option<String>,
}
