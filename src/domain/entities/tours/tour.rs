//! Tour Entity Implementation
//!
//! 공개 사이트와 관리자 패널 양쪽에서 사용하는 투어 엔티티입니다.
//! 슬러그로 조회되며, 일차별 일정(itinerary)을 내장 문서 배열로 보관합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 투어 일정의 하루치 항목
///
/// `day`는 1부터 시작하며, 저장 순서가 곧 표시 순서입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryDay {
    /// 일차 (1부터 시작)
    pub day: u32,
    /// 해당 일차 제목 (예: "Paro - Thimphu")
    pub title: String,
    /// 일정 설명
    pub description: String,
    /// 숙박 지역
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overnight: Option<String>,
}

/// 투어 엔티티
///
/// 마케팅 사이트의 핵심 콘텐츠 타입입니다. 관리자 폼에서 생성되고,
/// 공개 사이트에서는 슬러그 기반으로 조회됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// URL 슬러그 (unique)
    pub slug: String,
    /// 투어 제목
    pub title: String,
    /// 상세 설명
    pub description: String,
    /// 대표 이미지 (업로드 파일명)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// 카테고리 (예: "cultural", "trekking", "festival")
    pub category: String,
    /// 1인 기준 가격 (USD)
    pub price: f64,
    /// 일정 길이 (일)
    pub duration_days: u32,
    /// 일차별 일정 (day 오름차순)
    pub itinerary: Vec<ItineraryDay>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Tour {
    /// 새 투어 생성
    ///
    /// ID는 MongoDB가 할당하며, 생성/수정 시간은 현재 시각으로 초기화됩니다.
    pub fn new(
        slug: String,
        title: String,
        description: String,
        image: Option<String>,
        category: String,
        price: f64,
        duration_days: u32,
        itinerary: Vec<ItineraryDay>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            slug,
            title,
            description,
            image,
            category,
            price,
            duration_days,
            itinerary,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|oid| oid.to_hex())
    }
}
