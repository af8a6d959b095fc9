//! 목적지 API 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::domain::dto::hotels::CoordinatesPayload;
use crate::domain::entities::destinations::Region;
use crate::utils::string_utils::deserialize_optional_string;

/// 목적지 생성/수정 요청 본문
#[derive(Debug, Deserialize, Validate)]
pub struct DestinationPayload {
    #[validate(length(min = 1, max = 100, message = "이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    /// 생략 시 이름에서 슬러그를 생성합니다.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub slug: Option<String>,

    #[validate(nested)]
    pub coordinates: CoordinatesPayload,

    /// 소속 지역 ("western" | "central" | "eastern")
    pub region: Region,
}
