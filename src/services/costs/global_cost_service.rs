//! # 전역 비용 서비스 구현

use std::sync::Arc;
use mongodb::bson::{doc, DateTime};
use singleton_macro::service;
use crate::{
    domain::dto::costs::GlobalCostPayload,
    domain::entities::costs::GlobalCost,
    repositories::costs::GlobalCostRepository,
};
use crate::errors::errors::AppError;

/// 전역 비용 비즈니스 로직 서비스
#[service(name = "globalcost")]
pub struct GlobalCostService {
    /// 전역 비용 데이터 액세스 리포지토리 (자동 주입)
    global_cost_repo: Arc<GlobalCostRepository>,
}

impl GlobalCostService {
    /// 전체 비용 항목 조회 (가격 페이지용)
    pub async fn list_all(&self) -> Result<Vec<GlobalCost>, AppError> {
        self.global_cost_repo.list_all().await
    }

    /// 새 비용 항목 생성
    pub async fn create(&self, payload: GlobalCostPayload) -> Result<GlobalCost, AppError> {
        let cost = GlobalCost::new(
            payload.key,
            payload.label,
            payload.amount,
            payload.currency.to_uppercase(),
            payload.notes,
        );

        self.global_cost_repo.create(cost).await
    }

    /// 비용 항목 전체 업데이트
    pub async fn update(&self, id: &str, payload: GlobalCostPayload) -> Result<GlobalCost, AppError> {
        // 다른 문서와의 키 충돌 검사
        if let Some(existing) = self.global_cost_repo.find_by_key(&payload.key).await? {
            let existing_id = existing.id.map(|oid| oid.to_hex());
            if existing_id.as_deref() != Some(id) {
                return Err(AppError::ConflictError(
                    format!("이미 사용 중인 비용 키입니다: {}", payload.key)
                ));
            }
        }

        let update_doc = doc! {
            "key": &payload.key,
            "label": &payload.label,
            "amount": payload.amount,
            "currency": payload.currency.to_uppercase(),
            "notes": payload.notes.as_deref(),
            "updated_at": DateTime::now(),
        };

        self.global_cost_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("비용 항목을 찾을 수 없습니다".to_string()))
    }

    /// 비용 항목 삭제
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.global_cost_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("비용 항목을 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }
}
