//! 체험 및 체험 유형 엔티티 모듈

pub mod experience;
pub mod experience_type;

pub use experience::Experience;
pub use experience_type::ExperienceType;
