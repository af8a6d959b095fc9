//! 호텔 엔티티 모듈

pub mod hotel;

pub use hotel::Hotel;
