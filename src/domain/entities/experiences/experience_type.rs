//! ExperienceType Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 체험 유형 엔티티
///
/// 체험 페이지의 상단 탭으로 렌더링되는 분류입니다.
/// `order` 오름차순으로 표시됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceType {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// URL 슬러그 (unique) - Experience.category가 이 값을 참조
    pub slug: String,
    /// 표시 제목 (예: "Wellness & Rejuvenation")
    pub title: String,
    /// 표시 순서
    pub order: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl ExperienceType {
    pub fn new(slug: String, title: String, order: i32) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            slug,
            title,
            order,
            created_at: now,
            updated_at: now,
        }
    }
}
