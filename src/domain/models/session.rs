//! 관리자 세션 토큰 모델
//!
//! `admin_session` 쿠키에 담기는 서명된 세션 값을 정의합니다.
//!
//! 서버 측 세션 저장소는 없습니다. 토큰은 만료 시각과 그 서명만 담은
//! `{expires_unix}.{hex(sha256(secret.expires_unix))}` 형태의 자기 검증
//! 값이며, 검증은 서명 재계산과 만료 확인으로 끝납니다.

use sha2::{Digest, Sha256};
use crate::errors::errors::AppError;

/// 검증된 관리자 세션
///
/// 세션 미들웨어가 쿠키 검증에 성공하면 이 값을 Request Extensions에
/// 저장하고, 핸들러는 이를 통해 인증 여부를 확인합니다.
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// 세션 만료 시각 (unix seconds)
    pub expires_at: i64,
}

impl AdminSession {
    /// 새 세션 토큰을 발급합니다.
    ///
    /// # 인자
    /// * `secret` - 서명 비밀 키
    /// * `ttl_seconds` - 현재 시각 기준 유효 기간
    pub fn issue(secret: &str, ttl_seconds: i64) -> String {
        let expires_at = chrono::Utc::now().timestamp() + ttl_seconds;
        format!("{}.{}", expires_at, signature(secret, expires_at))
    }

    /// 세션 토큰을 검증합니다.
    ///
    /// 형식 오류, 서명 불일치, 만료 모두 AuthenticationError로 반환됩니다.
    pub fn verify(token: &str, secret: &str) -> Result<Self, AppError> {
        let (expires_str, provided_sig) = token
            .split_once('.')
            .ok_or_else(|| AppError::AuthenticationError("잘못된 세션 토큰 형식입니다".to_string()))?;

        let expires_at: i64 = expires_str
            .parse()
            .map_err(|_| AppError::AuthenticationError("잘못된 세션 토큰 형식입니다".to_string()))?;

        if provided_sig != signature(secret, expires_at) {
            return Err(AppError::AuthenticationError("세션 서명이 유효하지 않습니다".to_string()));
        }

        if expires_at <= chrono::Utc::now().timestamp() {
            return Err(AppError::AuthenticationError("세션이 만료되었습니다".to_string()));
        }

        Ok(Self { expires_at })
    }
}

/// 만료 시각에 대한 서명을 계산합니다.
fn signature(secret: &str, expires_at: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(b".");
    hasher.update(expires_at.to_string().as_bytes());

    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_issue_verify_roundtrip() {
        let token = AdminSession::issue(SECRET, 3600);
        let session = AdminSession::verify(&token, SECRET).unwrap();

        assert!(session.expires_at > chrono::Utc::now().timestamp());
    }

    #[test]
    fn test_expired_token_fails() {
        let token = AdminSession::issue(SECRET, -10);

        assert!(AdminSession::verify(&token, SECRET).is_err());
    }

    #[test]
    fn test_tampered_expiry_fails() {
        let token = AdminSession::issue(SECRET, 60);
        let sig = token.split_once('.').unwrap().1;
        let forged = format!("{}.{}", i64::MAX, sig);

        assert!(AdminSession::verify(&forged, SECRET).is_err());
    }

    #[test]
    fn test_wrong_secret_fails() {
        let token = AdminSession::issue(SECRET, 3600);

        assert!(AdminSession::verify(&token, "other-secret").is_err());
    }

    #[test]
    fn test_garbage_token_fails() {
        assert!(AdminSession::verify("", SECRET).is_err());
        assert!(AdminSession::verify("no-dot-here", SECRET).is_err());
        assert!(AdminSession::verify("abc.def", SECRET).is_err());
    }
}
