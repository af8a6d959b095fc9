//! 전역 비용 엔티티 모듈

pub mod global_cost;

pub use global_cost::GlobalCost;
