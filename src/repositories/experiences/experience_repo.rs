//! # 체험 리포지토리 구현

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, Document}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::experiences::Experience,
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// 체험 데이터 액세스 리포지토리
///
/// 체험 페이지는 전체 카드를 유형별로 묶어 렌더링하므로
/// 목록 조회는 페이지네이션 없이 `order` 오름차순 전체를 반환합니다.
#[repository(name = "experience", collection = "experiences")]
pub struct ExperienceRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl ExperienceRepository {
    /// 슬러그로 체험 조회 (캐시 우선, TTL 600초)
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Experience>, AppError> {
        let cache_key = format!("experience:slug:{}", slug);

        if let Ok(Some(cached)) = self.redis.get::<Experience>(&cache_key).await {
            return Ok(Some(cached));
        }

        let experience = self.collection::<Experience>()
            .find_one(doc! { "slug": slug })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref experience) = experience {
            let _ = self.redis
                .set_with_expiry(&cache_key, experience, 600)
                .await;
        }

        Ok(experience)
    }

    /// 목록 조회 (order 오름차순, 유형 필터 선택)
    pub async fn list_all(&self, category: Option<&str>) -> Result<Vec<Experience>, AppError> {
        let filter = match category {
            Some(category) => doc! { "category": category },
            None => doc! {},
        };

        let cursor = self.collection::<Experience>()
            .find(filter)
            .sort(doc! { "order": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 체험 생성 (슬러그 중복 시 ConflictError)
    pub async fn create(&self, mut experience: Experience) -> Result<Experience, AppError> {
        if self.find_by_slug(&experience.slug).await?.is_some() {
            return Err(AppError::ConflictError(
                format!("이미 사용 중인 슬러그입니다: {}", experience.slug)
            ));
        }

        let result = self.collection::<Experience>()
            .insert_one(&experience)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        experience.id = result.inserted_id.as_object_id();

        let _ = self.invalidate_collection_cache(None).await;

        Ok(experience)
    }

    /// 체험 업데이트 (`$set`, 최신 문서 반환)
    pub async fn update(&self, id: &str, update_doc: Document) -> Result<Option<Experience>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let existing = self.collection::<Experience>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<Experience>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref updated_exp) = updated {
            let _ = self.invalidate_cache(id).await;
            let _ = self.redis.del(&format!("experience:slug:{}", updated_exp.slug)).await;

            if let Some(existing) = existing {
                if existing.slug != updated_exp.slug {
                    let _ = self.redis.del(&format!("experience:slug:{}", existing.slug)).await;
                }
            }
        }

        Ok(updated)
    }

    /// 체험 삭제
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let existing = self.collection::<Experience>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let result = self.collection::<Experience>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.invalidate_cache(id).await;
            let _ = self.invalidate_collection_cache(None).await;

            if let Some(existing) = existing {
                let _ = self.redis.del(&format!("experience:slug:{}", existing.slug)).await;
            }

            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 데이터베이스 인덱스 생성 (슬러그 unique, 유형별 표시 순서)
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Experience>();

        let slug_index = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("slug_unique".to_string())
                .build())
            .build();

        // 유형별 목록 조회가 주 패턴이므로 복합 인덱스
        let category_order_index = IndexModel::builder()
            .keys(doc! { "category": 1, "order": 1 })
            .options(IndexOptions::builder()
                .name("category_order".to_string())
                .build())
            .build();

        collection
            .create_indexes([slug_index, category_order_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
