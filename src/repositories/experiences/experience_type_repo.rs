//! # 체험 유형 리포지토리 구현

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, Document}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::experiences::ExperienceType,
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// 체험 유형 데이터 액세스 리포지토리
///
/// 체험 페이지의 탭 분류를 관리합니다. `order` 오름차순이 표시 순서입니다.
#[repository(name = "experiencetype", collection = "experience_types")]
pub struct ExperienceTypeRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl ExperienceTypeRepository {
    /// 슬러그로 체험 유형 조회
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<ExperienceType>, AppError> {
        self.collection::<ExperienceType>()
            .find_one(doc! { "slug": slug })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 전체 목록 조회 (order 오름차순)
    pub async fn list_all(&self) -> Result<Vec<ExperienceType>, AppError> {
        let cursor = self.collection::<ExperienceType>()
            .find(doc! {})
            .sort(doc! { "order": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 체험 유형 생성 (슬러그 중복 시 ConflictError)
    pub async fn create(&self, mut experience_type: ExperienceType) -> Result<ExperienceType, AppError> {
        if self.find_by_slug(&experience_type.slug).await?.is_some() {
            return Err(AppError::ConflictError(
                format!("이미 사용 중인 슬러그입니다: {}", experience_type.slug)
            ));
        }

        let result = self.collection::<ExperienceType>()
            .insert_one(&experience_type)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        experience_type.id = result.inserted_id.as_object_id();

        let _ = self.invalidate_collection_cache(None).await;

        Ok(experience_type)
    }

    /// 체험 유형 업데이트 (`$set`, 최신 문서 반환)
    pub async fn update(&self, id: &str, update_doc: Document) -> Result<Option<ExperienceType>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<ExperienceType>()
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

    /// 체험 유형 삭제
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<ExperienceType>()
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

    /// 데이터베이스 인덱스 생성 (슬러그 unique, 표시 순서)
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<ExperienceType>();

        let slug_index = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("slug_unique".to_string())
                .build())
            .build();

        let order_index = IndexModel::builder()
            .keys(doc! { "order": 1 })
            .options(IndexOptions::builder()
                .name("order_asc".to_string())
                .build())
            .build();

        collection
            .create_indexes([slug_index, order_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
