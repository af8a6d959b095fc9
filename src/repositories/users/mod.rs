pub mod admin_user_repo;

pub use admin_user_repo::AdminUserRepository;
