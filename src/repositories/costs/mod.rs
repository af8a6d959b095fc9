pub mod global_cost_repo;

pub use global_cost_repo::GlobalCostRepository;
