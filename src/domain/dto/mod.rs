//! # Data Transfer Objects Module
//!
//! API 요청/응답 본문 타입들을 정의합니다. 모든 요청 DTO는 `validator`
//! derive로 검증 규칙을 선언하고, 핸들러가 서비스 호출 전에 `validate()`를
//! 수행합니다.
//!
//! ## 설계 노트
//!
//! - 생성과 수정은 같은 `*Payload` 타입을 공유합니다. 원본 시스템의 관리자
//!   폼은 항상 전체 문서를 전송하므로 부분 업데이트 DTO가 없습니다.
//! - 선택적 문자열 필드는 [`deserialize_optional_string`]을 사용하여 빈
//!   문자열 제출을 None으로 정규화합니다.
//! - 응답은 대부분 엔티티를 그대로 직렬화하며, 별도 응답 DTO는 로그인과
//!   업로드처럼 엔티티와 형태가 다른 경우에만 둡니다.
//!
//! [`deserialize_optional_string`]: crate::utils::string_utils::deserialize_optional_string

use serde::Serialize;

pub mod tours;
pub mod hotels;
pub mod destinations;
pub mod experiences;
pub mod tour_requests;
pub mod auth;
pub mod costs;

/// 단순 메시지 응답 본문
///
/// 삭제, 로그아웃처럼 반환할 엔티티가 없는 작업에 사용합니다.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 업로드 성공 응답 본문
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// 저장된 파일명 (예: "3f1f0c0a-....jpg")
    pub filename: String,
    /// 제공 경로 (예: "/api/uploads/3f1f0c0a-....jpg")
    pub url: String,
}

/// 이동 시간 조회 응답 본문
#[derive(Debug, Serialize)]
pub struct TravelTimeResponse {
    pub from: String,
    pub to: String,
    /// 이동 시간(분) - 수록되지 않은 구간은 0
    pub minutes: u32,
}
