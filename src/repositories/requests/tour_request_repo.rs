//! # 여행자 문의 리포지토리 구현
//!
//! 문의는 공개 폼에서 생성되고 관리자 패널에서 검토됩니다.
//! 검토 흐름 특성상 캐싱하지 않습니다 (항상 최신 상태를 보여야 함).

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, DateTime}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::requests::{TourRequest, TourRequestStatus},
    domain::models::pagination::PageQuery,
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// 여행자 문의 데이터 액세스 리포지토리
#[repository(name = "tourrequest", collection = "tour_requests")]
pub struct TourRequestRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl TourRequestRepository {
    /// ID로 문의 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<TourRequest>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.collection::<TourRequest>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 페이지네이션 목록 조회 (최신 순, 상태 필터 선택)
    pub async fn list(
        &self,
        query: &PageQuery,
        status: Option<TourRequestStatus>,
    ) -> Result<(Vec<TourRequest>, u64), AppError> {
        let filter = match status {
            Some(status) => doc! { "status": status.as_str() },
            None => doc! {},
        };

        let total = self.collection::<TourRequest>()
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let cursor = self.collection::<TourRequest>()
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .skip(query.skip())
            .limit(query.limit())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let requests: Vec<TourRequest> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok((requests, total))
    }

    /// 새 문의 저장
    pub async fn create(&self, mut request: TourRequest) -> Result<TourRequest, AppError> {
        let result = self.collection::<TourRequest>()
            .insert_one(&request)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        request.id = result.inserted_id.as_object_id();

        Ok(request)
    }

    /// 문의 상태 변경 (최신 문서 반환)
    pub async fn set_status(
        &self,
        id: &str,
        status: TourRequestStatus,
    ) -> Result<Option<TourRequest>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection::<TourRequest>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": {
                    "status": status.as_str(),
                    "updated_at": DateTime::now(),
                } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 문의 삭제
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<TourRequest>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    /// 데이터베이스 인덱스 생성 (상태, 생성일 내림차순)
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<TourRequest>();

        let status_index = IndexModel::builder()
            .keys(doc! { "status": 1 })
            .options(IndexOptions::builder()
                .name("status".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([status_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
