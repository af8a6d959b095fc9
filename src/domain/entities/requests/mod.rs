//! 여행자 문의 엔티티 모듈

pub mod tour_request;

pub use tour_request::{TourRequest, TourRequestStatus};
