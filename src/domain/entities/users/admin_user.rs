//! AdminUser Entity Implementation
//!
//! 관리자 패널 사용자의 프로필 엔티티입니다.
//!
//! 로그인 검증 자체는 설정된 자격 증명 쌍([`crate::config::AdminAuthConfig`])으로
//! 이루어지며, 이 레코드는 `/admin/auth/me` 표시와 마지막 로그인 시각 기록에
//! 사용됩니다. 시드 스크립트가 생성합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 관리자 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 이메일 (unique)
    pub email: String,
    /// 사용자 이름
    pub username: String,
    /// 역할 (현재 "admin" 단일 역할)
    pub role: String,
    /// 해시된 비밀번호 (bcrypt)
    pub password_hash: String,
    /// 마지막 로그인 시간
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl AdminUser {
    pub fn new(email: String, username: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            username,
            role: "admin".to_string(),
            password_hash,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.map(|oid| oid.to_hex())
    }
}
