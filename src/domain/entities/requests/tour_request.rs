//! TourRequest Entity Implementation
//!
//! 공개 사이트의 문의 폼에서 생성되는 여행자 문의 엔티티입니다.
//! 관리자 패널의 검토 워크플로(pending → approved/rejected/archived)를 거칩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::errors::errors::AppError;

/// 문의 검토 상태
///
/// 소문자로 직렬화되어 저장/전송됩니다. 새 문의는 항상 `pending`으로
/// 시작하며, 상태 전이에 제약은 없습니다 (관리자가 자유롭게 변경).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TourRequestStatus {
    Pending,
    Approved,
    Rejected,
    Archived,
}

impl TourRequestStatus {
    /// 문자열에서 상태를 파싱합니다.
    ///
    /// 알 수 없는 값은 ValidationError로 반환됩니다.
    pub fn from_str(s: &str) -> Result<Self, AppError> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TourRequestStatus::Pending),
            "approved" => Ok(TourRequestStatus::Approved),
            "rejected" => Ok(TourRequestStatus::Rejected),
            "archived" => Ok(TourRequestStatus::Archived),
            other => Err(AppError::ValidationError(
                format!("알 수 없는 문의 상태입니다: {}", other)
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TourRequestStatus::Pending => "pending",
            TourRequestStatus::Approved => "approved",
            TourRequestStatus::Rejected => "rejected",
            TourRequestStatus::Archived => "archived",
        }
    }
}

/// 여행자 문의 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourRequest {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 문의자 이름
    pub name: String,
    /// 문의자 이메일
    pub email: String,
    /// 전화번호 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// 거주 국가 (선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// 관심 투어 슬러그 (선택 - 투어 상세 페이지에서 문의한 경우)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tour_slug: Option<String>,
    /// 문의 내용
    pub message: String,
    /// 검토 상태
    pub status: TourRequestStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl TourRequest {
    /// 새 문의 생성 - 항상 pending 상태로 시작합니다.
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        country: Option<String>,
        tour_slug: Option<String>,
        message: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            phone,
            country,
            tour_slug,
            message,
            status: TourRequestStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.map(|oid| oid.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TourRequestStatus::Pending).unwrap(), "\"pending\"");
        assert_eq!(serde_json::to_string(&TourRequestStatus::Approved).unwrap(), "\"approved\"");
        assert_eq!(serde_json::to_string(&TourRequestStatus::Rejected).unwrap(), "\"rejected\"");
        assert_eq!(serde_json::to_string(&TourRequestStatus::Archived).unwrap(), "\"archived\"");
    }

    #[test]
    fn test_status_from_str_roundtrip() {
        for status in [
            TourRequestStatus::Pending,
            TourRequestStatus::Approved,
            TourRequestStatus::Rejected,
            TourRequestStatus::Archived,
        ] {
            assert_eq!(TourRequestStatus::from_str(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn test_status_from_str_rejects_unknown() {
        assert!(TourRequestStatus::from_str("open").is_err());
        assert!(TourRequestStatus::from_str("").is_err());
    }

    #[test]
    fn test_new_request_starts_pending() {
        let request = TourRequest::new(
            "Tashi".to_string(),
            "tashi@example.com".to_string(),
            None,
            None,
            Some("druk-path-trek".to_string()),
            "Interested in the October departure.".to_string(),
        );

        assert_eq!(request.status, TourRequestStatus::Pending);
        assert!(request.id.is_none());
    }
}
