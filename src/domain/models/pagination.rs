//! 페이지네이션 모델
//!
//! 모든 목록 조회가 공유하는 페이지네이션 쿼리/메타데이터 타입입니다.
//! 원래 각 데이터 모듈마다 동일한 패턴이 반복되던 것을 하나의 구현으로
//! 모았습니다: 전체 건수 집계 → 총 페이지 올림 나눗셈 → skip/limit 조회.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 기본 페이지 크기
pub const DEFAULT_PAGE_SIZE: u64 = 12;

/// 목록 조회 쿼리 파라미터
///
/// `?page=2&page_size=20` 형태의 쿼리 스트링에서 역직렬화됩니다.
/// 생략 시 page=1, page_size=12가 적용됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PageQuery {
    /// 페이지 번호 (1부터 시작)
    #[validate(range(min = 1, message = "page는 1 이상이어야 합니다"))]
    #[serde(default = "default_page")]
    pub page: u64,

    /// 페이지당 항목 수
    #[validate(range(min = 1, max = 100, message = "page_size는 1-100 사이여야 합니다"))]
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageQuery {
    /// MongoDB `skip()`에 전달할 건너뛸 문서 수
    pub fn skip(&self) -> u64 {
        (self.page - 1) * self.page_size
    }

    /// MongoDB `limit()`에 전달할 최대 문서 수
    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }
}

/// 페이지 메타데이터
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    /// 전체 건수에서 페이지 메타데이터를 계산합니다.
    ///
    /// `total_pages`는 올림 나눗셈(`ceil(total_items / page_size)`)이며,
    /// 경계 조건: 1페이지에서 `has_prev == false`,
    /// 마지막 페이지에서 `has_next == false`.
    pub fn new(page: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_items.div_ceil(page_size)
        };

        Self {
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// 페이지네이션된 목록 응답
///
/// `{"items": [...], "meta": {...}}` 형태로 직렬화됩니다.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, query: &PageQuery, total_items: u64) -> Self {
        Self {
            items,
            meta: PageMeta::new(query.page, query.page_size, total_items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling_division() {
        assert_eq!(PageMeta::new(1, 10, 0).total_pages, 0);
        assert_eq!(PageMeta::new(1, 10, 1).total_pages, 1);
        assert_eq!(PageMeta::new(1, 10, 10).total_pages, 1);
        assert_eq!(PageMeta::new(1, 10, 11).total_pages, 2);
        assert_eq!(PageMeta::new(1, 10, 99).total_pages, 10);
        assert_eq!(PageMeta::new(1, 10, 100).total_pages, 10);
        assert_eq!(PageMeta::new(1, 3, 7).total_pages, 3);
        assert_eq!(PageMeta::new(1, 1, 7).total_pages, 7);
    }

    #[test]
    fn test_first_page_has_no_prev() {
        let meta = PageMeta::new(1, 10, 35);
        assert!(!meta.has_prev);
        assert!(meta.has_next);
    }

    #[test]
    fn test_last_page_has_no_next() {
        let meta = PageMeta::new(4, 10, 35);
        assert!(meta.has_prev);
        assert!(!meta.has_next);
    }

    #[test]
    fn test_middle_page_has_both() {
        let meta = PageMeta::new(2, 10, 35);
        assert!(meta.has_prev);
        assert!(meta.has_next);
    }

    #[test]
    fn test_single_page_has_neither() {
        let meta = PageMeta::new(1, 10, 7);
        assert!(!meta.has_prev);
        assert!(!meta.has_next);
        assert_eq!(meta.total_pages, 1);
    }

    #[test]
    fn test_empty_collection() {
        let meta = PageMeta::new(1, 10, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
    }

    #[test]
    fn test_skip_and_limit() {
        let query = PageQuery { page: 3, page_size: 20 };
        assert_eq!(query.skip(), 40);
        assert_eq!(query.limit(), 20);

        let first = PageQuery { page: 1, page_size: 12 };
        assert_eq!(first.skip(), 0);
    }

    #[test]
    fn test_query_defaults_from_empty_json() {
        let query: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_query_validation_bounds() {
        let ok = PageQuery { page: 1, page_size: 100 };
        assert!(ok.validate().is_ok());

        let zero_page = PageQuery { page: 0, page_size: 10 };
        assert!(zero_page.validate().is_err());

        let oversized = PageQuery { page: 1, page_size: 101 };
        assert!(oversized.validate().is_err());
    }
}
