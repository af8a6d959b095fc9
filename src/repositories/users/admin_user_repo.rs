//! # 관리자 사용자 리포지토리 구현
//!
//! `users` 컬렉션의 관리자 프로필 레코드를 관리합니다.
//! 인증 자체는 설정된 자격 증명 쌍으로 이루어지므로, 이 리포지토리는
//! `/admin/auth/me` 표시와 마지막 로그인 기록에 사용됩니다.

use std::sync::Arc;
use mongodb::{bson::{doc, DateTime}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::users::AdminUser,
};
use singleton_macro::repository;
use crate::errors::errors::AppError;

/// 관리자 사용자 데이터 액세스 리포지토리
#[repository(name = "adminuser", collection = "users")]
pub struct AdminUserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl AdminUserRepository {
    /// 이메일로 관리자 조회
    pub async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, AppError> {
        self.collection::<AdminUser>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 관리자 레코드 생성 (이메일 중복 시 ConflictError)
    pub async fn create(&self, mut user: AdminUser) -> Result<AdminUser, AppError> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError(
                format!("이미 등록된 이메일입니다: {}", user.email)
            ));
        }

        let result = self.collection::<AdminUser>()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 마지막 로그인 시각 기록
    ///
    /// 레코드가 없어도 실패하지 않습니다 (설정 자격 증명만으로 로그인한 경우).
    pub async fn touch_last_login(&self, email: &str) -> Result<(), AppError> {
        self.collection::<AdminUser>()
            .update_one(
                doc! { "email": email },
                doc! { "$set": {
                    "last_login_at": DateTime::now(),
                    "updated_at": DateTime::now(),
                } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 데이터베이스 인덱스 생성 (이메일 unique)
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<AdminUser>();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
