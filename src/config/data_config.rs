//! 데이터 및 서버 설정
//!
//! 실행 환경 구분, HTTP 서버 바인딩, 비밀번호 해싱 비용, 업로드 저장소 위치 등
//! 환경 변수 기반 설정값들을 제공합니다.

use std::env;

/// 실행 환경 구분
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// 현재 실행 환경을 반환합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 읽으며, 알 수 없는 값은 Production으로
    /// 간주합니다 (안전한 기본값).
    pub fn current() -> Self {
        match env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "production".to_string())
            .to_lowercase()
            .as_str()
        {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 해싱 설정
///
/// 시드 스크립트가 관리자 비밀번호를 해싱할 때 사용하는 bcrypt 비용입니다.
/// 개발/테스트 환경에서는 낮은 비용으로 빠르게, 운영 환경에서는 높은 비용으로
/// 안전하게 동작합니다.
pub struct PasswordConfig;

impl PasswordConfig {
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if cost >= 4 && cost <= 15 {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// CORS 허용 Origin (프론트엔드 주소)
    pub fn cors_allowed_origin() -> String {
        env::var("CORS_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
    }
}

/// 이미지 업로드 저장소 설정
pub struct UploadConfig;

impl UploadConfig {
    /// 업로드 파일이 저장되는 로컬 디렉터리
    pub fn dir() -> String {
        env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string())
    }

    /// 업로드 허용 최대 크기 (바이트)
    pub fn max_bytes() -> usize {
        env::var("UPLOAD_MAX_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10 * 1024 * 1024)
    }

    /// 재인코딩 시 이미지의 최대 가로 픽셀
    ///
    /// 이보다 넓은 이미지는 비율을 유지하며 축소됩니다.
    pub fn max_width() -> u32 {
        env::var("UPLOAD_MAX_WIDTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1920)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Development),
            4
        );
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Staging),
            10
        );
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Production),
            12
        );
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_upload_config_defaults() {
        if env::var("UPLOAD_DIR").is_err() {
            assert_eq!(UploadConfig::dir(), "uploads");
        }

        if env::var("UPLOAD_MAX_WIDTH").is_err() {
            assert_eq!(UploadConfig::max_width(), 1920);
        }
    }
}
