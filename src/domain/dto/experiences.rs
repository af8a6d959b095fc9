//! 체험 및 체험 유형 API 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// 체험 유형 생성/수정 요청 본문
#[derive(Debug, Deserialize, Validate)]
pub struct ExperienceTypePayload {
    #[validate(length(min = 1, max = 100, message = "제목은 1-100자 사이여야 합니다"))]
    pub title: String,

    /// 생략 시 제목에서 슬러그를 생성합니다.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub slug: Option<String>,

    /// 표시 순서 (작을수록 먼저)
    #[serde(default)]
    pub order: i32,
}

/// 체험 생성/수정 요청 본문
#[derive(Debug, Deserialize, Validate)]
pub struct ExperiencePayload {
    #[validate(length(min = 1, max = 200, message = "제목은 1-200자 사이여야 합니다"))]
    pub title: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub slug: Option<String>,

    #[validate(length(min = 1, message = "설명은 필수입니다"))]
    pub description: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image: Option<String>,

    /// 체험 유형 슬러그
    #[validate(length(min = 1, max = 100, message = "카테고리는 필수입니다"))]
    pub category: String,

    #[serde(default)]
    pub order: i32,
}

/// 체험 목록 필터
#[derive(Debug, Deserialize)]
pub struct ExperienceFilter {
    /// 체험 유형 슬러그 필터
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub category: Option<String>,
}
