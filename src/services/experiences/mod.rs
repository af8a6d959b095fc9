pub mod experience_service;

pub use experience_service::ExperienceService;
