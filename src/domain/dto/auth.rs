//! 관리자 인증 API DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 관리자 로그인 요청 본문
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호는 필수입니다"))]
    pub password: String,
}

/// 로그인 성공 응답 본문
///
/// 세션은 쿠키로 전달되므로 본문에는 표시용 정보만 담습니다.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub email: String,
    pub username: String,
    pub role: String,
}
