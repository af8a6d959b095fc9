//! # 전역 비용 리포지토리 구현

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, Document}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::costs::GlobalCost,
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// 전역 비용 데이터 액세스 리포지토리
///
/// 가격 페이지의 공통 요금 항목(`global_costs` 컬렉션)을 관리합니다.
#[repository(name = "globalcost", collection = "global_costs")]
pub struct GlobalCostRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl GlobalCostRepository {
    /// 키로 비용 항목 조회
    pub async fn find_by_key(&self, key: &str) -> Result<Option<GlobalCost>, AppError> {
        self.collection::<GlobalCost>()
            .find_one(doc! { "key": key })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 전체 목록 조회 (키 오름차순)
    pub async fn list_all(&self) -> Result<Vec<GlobalCost>, AppError> {
        let cursor = self.collection::<GlobalCost>()
            .find(doc! {})
            .sort(doc! { "key": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 비용 항목 생성 (키 중복 시 ConflictError)
    pub async fn create(&self, mut cost: GlobalCost) -> Result<GlobalCost, AppError> {
        if self.find_by_key(&cost.key).await?.is_some() {
            return Err(AppError::ConflictError(
                format!("이미 사용 중인 비용 키입니다: {}", cost.key)
            ));
        }

        let result = self.collection::<GlobalCost>()
            .insert_one(&cost)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cost.id = result.inserted_id.as_object_id();

        let _ = self.invalidate_collection_cache(None).await;

        Ok(cost)
    }

    /// 비용 항목 업데이트 (`$set`, 최신 문서 반환)
    pub async fn update(&self, id: &str, update_doc: Document) -> Result<Option<GlobalCost>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<GlobalCost>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if updated.is_some() {
            let _ = self.invalidate_cache(id).await;
        }

        Ok(updated)
    }

    /// 비용 항목 삭제
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<GlobalCost>()
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

    /// 데이터베이스 인덱스 생성 (키 unique)
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<GlobalCost>();

        let key_index = IndexModel::builder()
            .keys(doc! { "key": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("key_unique".to_string())
                .build())
            .build();

        collection
            .create_indexes([key_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
