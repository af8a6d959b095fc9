//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 업로드 저장소, 해싱 비용 설정
//! - [`auth_config`] - 관리자 자격 증명과 세션 쿠키 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전 (기본값 사용 시 경고 로그)
//!
//! ### 3. 타입 안전성 (Type Safety)
//!
//! - 설정값의 타입 검증 및 파싱 오류 시 안전한 기본값 사용
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수 (프로덕션)
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 데이터 스토어
//! export MONGODB_URI="mongodb://..."
//! export MONGODB_DB="druk_travel"
//! export REDIS_URL="redis://..."
//!
//! # 관리자 인증
//! export ADMIN_EMAIL="admin@druktravel.bt"
//! export ADMIN_PASSWORD_HASH='$2b$12$...'
//! export SESSION_SECRET="..."
//!
//! # 업로드 저장소
//! export UPLOAD_DIR="/var/lib/druk/uploads"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::{Environment, PasswordConfig, ServerConfig, UploadConfig};
pub use auth_config::{AdminAuthConfig, SessionConfig};
