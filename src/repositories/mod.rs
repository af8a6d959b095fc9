//! # Repositories Module
//!
//! 데이터 액세스 계층입니다. 각 리포지토리는 `#[repository]` 매크로로
//! 싱글톤으로 관리되며 `db`(MongoDB)와 `redis`(캐시)가 자동 주입됩니다.
//!
//! ## 공통 패턴
//!
//! - 단건 조회(슬러그/ID)는 캐시 우선, TTL 600초
//! - 쓰기는 개별 캐시와 컬렉션 캐시를 무효화
//! - 목록 조회는 `count_documents` + `skip`/`limit` 페이지네이션
//! - 유니크 제약은 `create_indexes()`에서 생성하는 MongoDB 인덱스로 보장

pub mod tours;
pub mod hotels;
pub mod destinations;
pub mod experiences;
pub mod requests;
pub mod users;
pub mod costs;
