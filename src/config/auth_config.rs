//! 관리자 인증 설정
//!
//! 관리자 패널 로그인에 사용되는 단일 자격 증명 쌍과
//! `admin_session` 쿠키의 서명/수명 설정을 제공합니다.
//!
//! 이 시스템의 인증 모델은 의도적으로 단순합니다: 설정된 이메일/비밀번호
//! 한 쌍만 로그인할 수 있고, 성공 시 서명된 HTTP-only 쿠키 하나가
//! `/admin` 라우트 전체를 보호합니다. 토큰 발급이나 세션 저장소는 없습니다.

use std::env;

/// 관리자 자격 증명 설정
///
/// 로그인은 이 설정 쌍과 정확히 일치할 때만 성공합니다.
pub struct AdminAuthConfig;

impl AdminAuthConfig {
    /// 관리자 이메일
    pub fn email() -> String {
        env::var("ADMIN_EMAIL")
            .unwrap_or_else(|_| "admin@druktravel.bt".to_string())
    }

    /// 관리자 비밀번호의 bcrypt 해시
    ///
    /// 평문 비밀번호는 어디에도 저장하지 않습니다. 해시가 설정되지 않은
    /// 개발 환경에서는 기본 비밀번호 `admin123`을 현장에서 해싱하여 사용합니다.
    pub fn password_hash() -> String {
        env::var("ADMIN_PASSWORD_HASH").unwrap_or_else(|_| {
            log::warn!("ADMIN_PASSWORD_HASH not set, using default password (not secure for production!)");
            bcrypt::hash("admin123", crate::config::PasswordConfig::bcrypt_cost())
                .expect("bcrypt hashing of default password failed")
        })
    }

    /// 관리자 계정의 표시 이름 (users 컬렉션의 프로필 레코드용)
    pub fn username() -> String {
        env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string())
    }
}

/// 세션 쿠키 설정
pub struct SessionConfig;

impl SessionConfig {
    /// 관리자 세션 쿠키 이름
    pub const COOKIE_NAME: &'static str = "admin_session";

    /// 세션 토큰 서명에 사용하는 비밀 키
    pub fn secret() -> String {
        env::var("SESSION_SECRET").unwrap_or_else(|_| {
            log::warn!("SESSION_SECRET not set, using default (not secure for production!)");
            "druk-session-secret".to_string()
        })
    }

    /// 세션 유효 기간 (일)
    pub fn ttl_days() -> i64 {
        env::var("SESSION_TTL_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .unwrap_or(7)
    }

    /// 세션 유효 기간 (초) - 쿠키 Max-Age와 토큰 만료에 공용
    pub fn ttl_seconds() -> i64 {
        Self::ttl_days() * 24 * 60 * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_name() {
        assert_eq!(SessionConfig::COOKIE_NAME, "admin_session");
    }

    #[test]
    fn test_session_ttl_default_is_one_week() {
        if env::var("SESSION_TTL_DAYS").is_err() {
            assert_eq!(SessionConfig::ttl_days(), 7);
            assert_eq!(SessionConfig::ttl_seconds(), 7 * 24 * 60 * 60);
        }
    }

    #[test]
    fn test_admin_email_default() {
        if env::var("ADMIN_EMAIL").is_err() {
            assert_eq!(AdminAuthConfig::email(), "admin@druktravel.bt");
        }
    }

    #[test]
    fn test_default_password_hash_verifies_only_default_password() {
        if env::var("ADMIN_PASSWORD_HASH").is_err() {
            let hash = AdminAuthConfig::password_hash();

            assert!(bcrypt::verify("admin123", &hash).unwrap());
            assert!(!bcrypt::verify("admin124", &hash).unwrap());
            assert!(!bcrypt::verify("", &hash).unwrap());
        }
    }
}
