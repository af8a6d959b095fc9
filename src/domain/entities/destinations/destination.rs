//! Destination Entity Implementation
//!
//! 지도와 여행지 페이지에서 사용하는 목적지 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 위경도 좌표
///
/// 지도 마커 렌더링에 사용됩니다. 호텔과 목적지가 공유하는 값 객체입니다.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// 부탄 내 지역 구분
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Western,
    Central,
    Eastern,
}

/// 목적지 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// URL 슬러그 (unique)
    pub slug: String,
    /// 목적지 이름 (예: "Punakha")
    pub name: String,
    /// 지도 마커 좌표
    pub coordinates: Coordinates,
    /// 소속 지역
    pub region: Region,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Destination {
    pub fn new(slug: String, name: String, coordinates: Coordinates, region: Region) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            slug,
            name,
            coordinates,
            region,
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
    fn test_region_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Region::Western).unwrap(), "\"western\"");
        assert_eq!(serde_json::to_string(&Region::Central).unwrap(), "\"central\"");
        assert_eq!(serde_json::to_string(&Region::Eastern).unwrap(), "\"eastern\"");
    }

    #[test]
    fn test_region_deserializes_lowercase() {
        let region: Region = serde_json::from_str("\"eastern\"").unwrap();
        assert_eq!(region, Region::Eastern);
    }
}
