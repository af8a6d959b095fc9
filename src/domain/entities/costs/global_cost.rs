//! GlobalCost Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 전역 비용 항목 엔티티
///
/// 가격 페이지에 표시되는 공통 요금 항목입니다.
/// 예: 지속가능발전기금(SDF), 비자 수수료, 가이드 일당.
/// `key`는 프론트엔드가 항목을 찾는 안정적 식별자입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalCost {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 항목 식별자 (unique, 예: "sdf_adult")
    pub key: String,
    /// 표시 레이블 (예: "Sustainable Development Fee (adult)")
    pub label: String,
    /// 금액
    pub amount: f64,
    /// 통화 코드 (예: "USD")
    pub currency: String,
    /// 비고 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl GlobalCost {
    pub fn new(key: String, label: String, amount: f64, currency: String, notes: Option<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            key,
            label,
            amount,
            currency,
            notes,
            created_at: now,
            updated_at: now,
        }
    }
}
