//! # 관리자 인증 서비스 구현
//!
//! 설정된 단일 자격 증명 쌍에 대한 로그인 검증과 세션 토큰 발급을 담당합니다.
//!
//! 인증 실패는 항상 `AppError::AuthenticationError` 값으로 반환됩니다
//! (패닉 없음). 이메일 불일치와 비밀번호 불일치는 같은 메시지를 사용하여
//! 계정 존재 여부를 노출하지 않습니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    config::{AdminAuthConfig, SessionConfig},
    domain::dto::auth::{LoginRequest, LoginResponse},
    domain::entities::users::AdminUser,
    domain::models::session::AdminSession,
    repositories::users::AdminUserRepository,
};
use crate::errors::errors::AppError;

/// 관리자 인증 비즈니스 로직 서비스
#[service(name = "adminauth")]
pub struct AdminAuthService {
    /// 관리자 프로필 리포지토리 (자동 주입)
    admin_user_repo: Arc<AdminUserRepository>,
}

impl AdminAuthService {
    /// 관리자 로그인
    ///
    /// 설정된 이메일과 정확히 일치하고 bcrypt 검증을 통과해야만 성공합니다.
    /// 성공 시 서명된 세션 토큰과 표시용 응답을 반환하고, `users` 컬렉션의
    /// 프로필 레코드에 마지막 로그인 시각을 기록합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok((LoginResponse, String))` - 응답 본문과 세션 토큰 (쿠키 값)
    /// * `Err(AppError::AuthenticationError)` - 자격 증명 불일치
    pub async fn login(&self, request: LoginRequest) -> Result<(LoginResponse, String), AppError> {
        let configured_email = AdminAuthConfig::email();

        if request.email != configured_email {
            log::warn!("관리자 로그인 실패 (이메일 불일치): {}", request.email);
            return Err(AppError::AuthenticationError(
                "잘못된 이메일 또는 비밀번호입니다".to_string()
            ));
        }

        let password_hash = AdminAuthConfig::password_hash();
        let is_valid = bcrypt::verify(&request.password, &password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            log::warn!("관리자 로그인 실패 (비밀번호 불일치): {}", request.email);
            return Err(AppError::AuthenticationError(
                "잘못된 이메일 또는 비밀번호입니다".to_string()
            ));
        }

        // 프로필 레코드에 마지막 로그인 기록 (레코드가 없어도 로그인은 성공)
        if let Err(e) = self.admin_user_repo.touch_last_login(&configured_email).await {
            log::warn!("마지막 로그인 기록 실패: {}", e);
        }

        // 프로필 레코드가 있으면 표시 정보로 사용
        let profile = self.admin_user_repo.find_by_email(&configured_email).await?;

        let (username, role) = match profile {
            Some(profile) => (profile.username, profile.role),
            None => (AdminAuthConfig::username(), "admin".to_string()),
        };

        let token = AdminSession::issue(&SessionConfig::secret(), SessionConfig::ttl_seconds());

        log::info!("관리자 로그인 성공: {}", configured_email);

        let response = LoginResponse {
            message: "로그인되었습니다".to_string(),
            email: configured_email,
            username,
            role,
        };

        Ok((response, token))
    }

    /// 현재 관리자 프로필 조회 (`/admin/auth/me`)
    pub async fn me(&self) -> Result<AdminUser, AppError> {
        self.admin_user_repo
            .find_by_email(&AdminAuthConfig::email())
            .await?
            .ok_or_else(|| AppError::NotFound(
                "관리자 프로필 레코드가 없습니다. 시드 스크립트를 실행해주세요".to_string()
            ))
    }
}
