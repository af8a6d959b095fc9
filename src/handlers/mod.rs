//! # HTTP Handlers Module
//!
//! 요청/응답 처리 계층입니다. 각 핸들러는 얇게 유지됩니다:
//! DTO 검증 → 싱글톤 서비스 호출 → HTTP 응답 변환.
//! 에러는 `AppError`의 `ResponseError` 구현이 상태 코드와 JSON 본문으로
//! 자동 변환합니다.
//!
//! ## 핸들러 구성
//!
//! - [`tours`] / [`hotels`] / [`destinations`] / [`experiences`] / [`costs`]
//!   - 공개 조회 + 관리자 CRUD
//! - [`tour_requests`] - 공개 문의 제출 + 관리자 검토 워크플로
//! - [`auth`] - 관리자 로그인/로그아웃/프로필
//! - [`uploads`] - 이미지 업로드와 파일 제공
//! - [`travel_times`] - 구간 이동 시간 조회

pub mod tours;
pub mod hotels;
pub mod destinations;
pub mod experiences;
pub mod tour_requests;
pub mod auth;
pub mod costs;
pub mod travel_times;
pub mod uploads;
