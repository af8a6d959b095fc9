//! # 호텔 리포지토리 구현
//!
//! 호텔 엔티티의 데이터 액세스 계층입니다. 호텔은 슬러그 없이
//! ObjectId로 조회되며, ID 조회에만 Redis 캐싱을 적용합니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, Document}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::hotels::Hotel,
    domain::models::pagination::PageQuery,
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// 호텔 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - **캐시 키**: `hotel:{id}`, TTL 600초
/// - 목록 조회는 캐싱하지 않음 (필터/페이지 조합이 많음)
#[repository(name = "hotel", collection = "hotels")]
pub struct HotelRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl HotelRepository {
    /// ID로 호텔 조회 (캐시 우선)
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<Hotel>(&cache_key).await {
            return Ok(Some(cached));
        }

        let hotel = self.collection::<Hotel>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref hotel) = hotel {
            let _ = self.redis
                .set_with_expiry(&cache_key, hotel, 600)
                .await;
        }

        Ok(hotel)
    }

    /// 페이지네이션 목록 조회 (이름 오름차순)
    ///
    /// `location` 필터는 대소문자 무시 부분 일치로 동작합니다.
    pub async fn list(
        &self,
        query: &PageQuery,
        location: Option<&str>,
    ) -> Result<(Vec<Hotel>, u64), AppError> {
        let filter = match location {
            Some(location) => doc! {
                "location": { "$regex": location, "$options": "i" }
            },
            None => doc! {},
        };

        let total = self.collection::<Hotel>()
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let cursor = self.collection::<Hotel>()
            .find(filter)
            .sort(doc! { "name": 1 })
            .skip(query.skip())
            .limit(query.limit())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let hotels: Vec<Hotel> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok((hotels, total))
    }

    /// 새 호텔 생성
    pub async fn create(&self, mut hotel: Hotel) -> Result<Hotel, AppError> {
        let result = self.collection::<Hotel>()
            .insert_one(&hotel)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        hotel.id = result.inserted_id.as_object_id();

        let _ = self.invalidate_collection_cache(None).await;

        Ok(hotel)
    }

    /// 호텔 정보 업데이트 (`$set`, 최신 문서 반환)
    pub async fn update(&self, id: &str, update_doc: Document) -> Result<Option<Hotel>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_hotel = self.collection::<Hotel>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if updated_hotel.is_some() {
            let _ = self.invalidate_cache(id).await;
        }

        Ok(updated_hotel)
    }

    /// 호텔 삭제
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<Hotel>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.invalidate_cache(id).await;
            let _ = self.invalidate_collection_cache(None).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 데이터베이스 인덱스 생성 (소재지, 이름)
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Hotel>();

        let location_index = IndexModel::builder()
            .keys(doc! { "location": 1 })
            .options(IndexOptions::builder()
                .name("location".to_string())
                .build())
            .build();

        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .name("name_asc".to_string())
                .build())
            .build();

        collection
            .create_indexes([location_index, name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
