//! # 목적지 리포지토리 구현

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, Document}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::destinations::Destination,
    domain::models::pagination::PageQuery,
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// 목적지 데이터 액세스 리포지토리
///
/// 목적지는 수십 건 규모의 작은 컬렉션이므로 공개 사이트는 전체 목록을,
/// 관리자 패널은 페이지네이션 목록을 사용합니다.
#[repository(name = "destination", collection = "destinations")]
pub struct DestinationRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl DestinationRepository {
    /// 슬러그로 목적지 조회 (캐시 우선, TTL 600초)
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Destination>, AppError> {
        let cache_key = format!("destination:slug:{}", slug);

        if let Ok(Some(cached)) = self.redis.get::<Destination>(&cache_key).await {
            return Ok(Some(cached));
        }

        let destination = self.collection::<Destination>()
            .find_one(doc! { "slug": slug })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref destination) = destination {
            let _ = self.redis
                .set_with_expiry(&cache_key, destination, 600)
                .await;
        }

        Ok(destination)
    }

    /// 전체 목록 조회 (이름 오름차순)
    pub async fn list_all(&self) -> Result<Vec<Destination>, AppError> {
        let cursor = self.collection::<Destination>()
            .find(doc! {})
            .sort(doc! { "name": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 페이지네이션 목록 조회 (관리자 패널용)
    pub async fn list(&self, query: &PageQuery) -> Result<(Vec<Destination>, u64), AppError> {
        let total = self.collection::<Destination>()
            .count_documents(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let cursor = self.collection::<Destination>()
            .find(doc! {})
            .sort(doc! { "name": 1 })
            .skip(query.skip())
            .limit(query.limit())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let destinations: Vec<Destination> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok((destinations, total))
    }

    /// 새 목적지 생성 (슬러그 중복 시 ConflictError)
    pub async fn create(&self, mut destination: Destination) -> Result<Destination, AppError> {
        if self.find_by_slug(&destination.slug).await?.is_some() {
            return Err(AppError::ConflictError(
                format!("이미 사용 중인 슬러그입니다: {}", destination.slug)
            ));
        }

        let result = self.collection::<Destination>()
            .insert_one(&destination)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        destination.id = result.inserted_id.as_object_id();

        let _ = self.invalidate_collection_cache(None).await;

        Ok(destination)
    }

    /// 목적지 업데이트 (`$set`, 최신 문서 반환)
    pub async fn update(&self, id: &str, update_doc: Document) -> Result<Option<Destination>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let existing = self.collection::<Destination>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<Destination>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref updated_dest) = updated {
            let _ = self.invalidate_cache(id).await;
            let _ = self.redis.del(&format!("destination:slug:{}", updated_dest.slug)).await;

            if let Some(existing) = existing {
                if existing.slug != updated_dest.slug {
                    let _ = self.redis.del(&format!("destination:slug:{}", existing.slug)).await;
                }
            }
        }

        Ok(updated)
    }

    /// 목적지 삭제
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let existing = self.collection::<Destination>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let result = self.collection::<Destination>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.invalidate_cache(id).await;
            let _ = self.invalidate_collection_cache(None).await;

            if let Some(existing) = existing {
                let _ = self.redis.del(&format!("destination:slug:{}", existing.slug)).await;
            }

            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 데이터베이스 인덱스 생성 (슬러그 unique, 이름)
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Destination>();

        let slug_index = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("slug_unique".to_string())
                .build())
            .build();

        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .name("name_asc".to_string())
                .build())
            .build();

        collection
            .create_indexes([slug_index, name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
