pub mod tour_request_service;

pub use tour_request_service::TourRequestService;
