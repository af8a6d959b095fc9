pub mod global_cost_service;

pub use global_cost_service::GlobalCostService;
