//! 관리자 사용자 엔티티 모듈

pub mod admin_user;

pub use admin_user::AdminUser;
