pub mod tour_request_repo;

pub use tour_request_repo::TourRequestRepository;
