//! Experience Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 체험 엔티티
///
/// 체험 페이지의 카드 하나에 해당합니다. `category` 필드는
/// 체험 유형의 슬러그를 참조하며 (애플리케이션 수준 참조, FK 아님),
/// 같은 유형 안에서는 `order` 오름차순으로 표시됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// URL 슬러그 (unique)
    pub slug: String,
    /// 체험 제목
    pub title: String,
    /// 상세 설명
    pub description: String,
    /// 대표 이미지 (업로드 파일명)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// 체험 유형 슬러그
    pub category: String,
    /// 같은 유형 내 표시 순서
    pub order: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Experience {
    pub fn new(
        slug: String,
        title: String,
        description: String,
        image: Option<String>,
        category: String,
        order: i32,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            slug,
            title,
            description,
            image,
            category,
            order,
            created_at: now,
            updated_at: now,
        }
    }
}
