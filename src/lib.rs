//! 드룩 트래블 백엔드
//!
//! 부탄 여행사의 마케팅 사이트와 관리자 패널을 위한 콘텐츠/문의 백엔드입니다.
//! 투어, 호텔, 목적지, 체험 콘텐츠의 CRUD와 여행자 문의 접수,
//! 쿠키 기반 관리자 인증, 이미지 업로드를 제공합니다.
//!
//! # Features
//!
//! - **콘텐츠 관리**: 투어/호텔/목적지/체험/비용 CRUD와 슬러그 기반 조회
//! - **여행자 문의**: 공개 폼 접수와 검토 워크플로 (pending → approved/rejected/archived)
//! - **관리자 인증**: 설정 자격 증명 + 서명된 HTTP-only 세션 쿠키
//! - **이미지 업로드**: 재인코딩 파이프라인과 불변 캐시 파일 제공
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 콘텐츠 영구 저장
//! - **Redis**: 조회 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (+ 세션 미들웨어)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증 / 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (슬러그, 세션, 업로드 파이프라인)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (캐시 우선 조회)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use druk_travel_backend::services::tours::TourService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let tour_service = TourService::instance();
//!
//! // 슬러그로 투어 조회
//! let tour = tour_service.get_by_slug("druk-path-trek").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
pub mod seed;
