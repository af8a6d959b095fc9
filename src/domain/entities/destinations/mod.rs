//! 목적지 엔티티 모듈

pub mod destination;

pub use destination::{Coordinates, Destination, Region};
