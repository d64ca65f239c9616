pub mod controller;
pub mod model;
pub mod router;
pub mod service;

pub use model::SeedResponse;
pub use router::init_seeds_router;
pub use service::SeedService;
