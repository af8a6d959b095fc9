pub mod tour_service;

pub use tour_service::TourService;
