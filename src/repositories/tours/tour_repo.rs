//! # 투어 리포지토리 구현
//!
//! 투어 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **읽기 우선 캐싱**: 슬러그/ID 조회는 캐시를 먼저 확인
//! - **데이터 무결성**: 슬러그 유니크 인덱스 관리

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId, Document}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::tours::Tour,
    domain::models::pagination::PageQuery,
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// 투어 데이터 액세스 리포지토리
///
/// 투어 엔티티의 CRUD 연산과 페이지네이션 목록 조회를 담당하며,
/// MongoDB 컬렉션과 Redis 캐시를 통합합니다.
///
/// ## 캐싱 전략
///
/// ### L1 Cache (Redis)
/// - **TTL**: 10분 (600초)
/// - **키 패턴**:
///   - 개별 투어: `tour:{tour_id}`
///   - 슬러그 조회: `tour:slug:{slug}`
///   - 컬렉션 메타: `tourrepository:collection`
///
/// ### L2 Storage (MongoDB)
/// - **컬렉션명**: `tours`
/// - **인덱스**: slug(unique), category, title(asc)
///
/// ## 에러 처리
///
/// 모든 메서드는 `Result<T, AppError>` 타입을 반환합니다:
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ValidationError**: 잘못된 ObjectId 형식 등 입력값 검증 오류
/// - **ConflictError**: 슬러그 중복 등 유니크 제약 위반
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::repositories::tours::tour_repo::TourRepository;
///
/// let repo = TourRepository::instance();
///
/// // 슬러그로 조회 (캐시 활용)
/// let tour = repo.find_by_slug("druk-path-trek").await?;
///
/// // 페이지네이션 목록
/// let (tours, total) = repo.list(&PageQuery::default(), Some("trekking")).await?;
/// ```
#[repository(name = "tour", collection = "tours")]
pub struct TourRepository {
    /// MongoDB 데이터베이스 연결
    ///
    /// 자동 주입되는 데이터베이스 컴포넌트입니다.
    /// `tours` 컬렉션에 대한 모든 MongoDB 연산을 담당합니다.
    db: Arc<Database>,

    /// Redis 캐시 클라이언트
    ///
    /// 자동 주입되는 Redis 클라이언트입니다.
    /// 조회 성능 향상을 위한 캐싱 레이어를 제공합니다.
    redis: Arc<RedisClient>,
}

impl TourRepository {
    /// 슬러그로 투어 조회
    ///
    /// 공개 사이트의 투어 상세 페이지가 사용하는 주 조회 경로입니다.
    /// 캐시 우선 조회를 통해 성능을 최적화합니다.
    ///
    /// # 인자
    ///
    /// * `slug` - 조회할 투어의 URL 슬러그
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Tour))` - 투어를 찾은 경우
    /// * `Ok(None)` - 해당 슬러그의 투어가 없는 경우
    /// * `Err(AppError)` - 데이터베이스 오류
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `tour:slug:{slug}`
    /// - **TTL**: 600초 (10분)
    /// - **캐시 미스**: MongoDB에서 조회 후 캐시에 저장
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Tour>, AppError> {
        // 캐시에서 먼저 확인
        let cache_key = format!("tour:slug:{}", slug);

        if let Ok(Some(cached)) = self.redis.get::<Tour>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 에서 조회
        let tour = self.collection::<Tour>()
            .find_one(doc! { "slug": slug })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시에 저장 (10분)
        if let Some(ref tour) = tour {
            let _ = self.redis
                .set_with_expiry(&cache_key, tour, 600)
                .await;
        }

        Ok(tour)
    }

    /// ID로 투어 조회
    ///
    /// 관리자 패널의 수정 폼이 사용하는 조회 경로입니다.
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `tour:{id}` (리포지토리 매크로의 `cache_key()` 사용)
    /// - **TTL**: 600초 (10분)
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Tour>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<Tour>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let tour = self.collection::<Tour>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장
        if let Some(ref tour) = tour {
            let _ = self.redis
                .set_with_expiry(&cache_key, tour, 600)
                .await;
        }

        Ok(tour)
    }

    /// 페이지네이션 목록 조회
    ///
    /// 전체 건수를 집계한 뒤 `skip((page-1) * page_size)` + `limit(page_size)`로
    /// 해당 페이지를 조회합니다. 제목 오름차순 정렬이 표시 순서입니다.
    ///
    /// # 인자
    ///
    /// * `query` - 페이지 번호와 페이지 크기
    /// * `category` - 카테고리 필터 (None이면 전체)
    ///
    /// # 반환값
    ///
    /// * `Ok((Vec<Tour>, u64))` - 해당 페이지의 투어 목록과 전체 건수
    ///
    /// # 성능 고려사항
    ///
    /// 목록 조회는 캐싱하지 않습니다. 페이지/필터 조합이 많아 캐시 적중률이
    /// 낮고, 쓰기 시 무효화해야 할 키가 늘어나기 때문입니다.
    pub async fn list(
        &self,
        query: &PageQuery,
        category: Option<&str>,
    ) -> Result<(Vec<Tour>, u64), AppError> {
        let filter = match category {
            Some(category) => doc! { "category": category },
            None => doc! {},
        };

        let total = self.collection::<Tour>()
            .count_documents(filter.clone())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let cursor = self.collection::<Tour>()
            .find(filter)
            .sort(doc! { "title": 1 })
            .skip(query.skip())
            .limit(query.limit())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let tours: Vec<Tour> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok((tours, total))
    }

    /// 새 투어 생성
    ///
    /// 슬러그 중복을 사전에 검증하고, 성공 시 관련 캐시를 무효화합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Tour)` - 생성된 투어 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 슬러그 중복
    pub async fn create(&self, mut tour: Tour) -> Result<Tour, AppError> {
        // 중복 확인
        if self.find_by_slug(&tour.slug).await?.is_some() {
            return Err(AppError::ConflictError(
                format!("이미 사용 중인 슬러그입니다: {}", tour.slug)
            ));
        }

        // DB에 저장
        let result = self.collection::<Tour>()
            .insert_one(&tour)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        tour.id = result.inserted_id.as_object_id();

        // 컬렉션 캐시 무효화
        let _ = self.invalidate_collection_cache(None).await;

        Ok(tour)
    }

    /// 투어 정보 업데이트
    ///
    /// 지정된 필드들을 `$set`으로 업데이트하고 최신 문서를 반환합니다.
    /// 업데이트 후 해당 투어의 ID/슬러그 캐시를 모두 무효화합니다.
    ///
    /// # 인자
    ///
    /// * `id` - 업데이트할 투어의 ID (ObjectId 문자열)
    /// * `update_doc` - 업데이트할 필드들을 포함한 MongoDB Document
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Tour))` - 업데이트된 투어 정보
    /// * `Ok(None)` - 해당 ID의 투어가 존재하지 않음
    pub async fn update(&self, id: &str, update_doc: Document) -> Result<Option<Tour>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        // 슬러그 캐시 무효화를 위해 기존 문서 확보
        let existing = self.collection::<Tour>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_tour = self.collection::<Tour>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 무효화
        if let Some(ref updated) = updated_tour {
            let _ = self.invalidate_cache(id).await;
            let _ = self.redis.del(&format!("tour:slug:{}", updated.slug)).await;

            if let Some(existing) = existing {
                if existing.slug != updated.slug {
                    let _ = self.redis.del(&format!("tour:slug:{}", existing.slug)).await;
                }
            }
        }

        Ok(updated_tour)
    }

    /// 투어 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 투어가 성공적으로 삭제됨
    /// * `Ok(false)` - 해당 ID의 투어가 존재하지 않음
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        // 슬러그 캐시 무효화를 위해 문서 확보
        let existing = self.collection::<Tour>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let result = self.collection::<Tour>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            // 캐시 무효화
            let _ = self.invalidate_cache(id).await;
            let _ = self.invalidate_collection_cache(None).await;

            if let Some(existing) = existing {
                let _ = self.redis.del(&format!("tour:slug:{}", existing.slug)).await;
            }

            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행하여 쿼리 성능을 최적화합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **슬러그 유니크 인덱스** - 중복 슬러그 방지 및 슬러그 조회 최적화
    /// 2. **카테고리 인덱스** - 카테고리 필터 목록 조회 최적화
    /// 3. **제목 인덱스** - 목록 정렬 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Tour>();

        // 슬러그 유니크 인덱스
        let slug_index = IndexModel::builder()
            .keys(doc! { "slug": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("slug_unique".to_string())
                .build())
            .build();

        // 카테고리 인덱스
        let category_index = IndexModel::builder()
            .keys(doc! { "category": 1 })
            .options(IndexOptions::builder()
                .name("category".to_string())
                .build())
            .build();

        // 제목 인덱스 (목록 정렬용)
        let title_index = IndexModel::builder()
            .keys(doc! { "title": 1 })
            .options(IndexOptions::builder()
                .name("title_asc".to_string())
                .build())
            .build();

        collection
            .create_indexes([slug_index, category_index, title_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
