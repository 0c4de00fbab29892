//! Careerwise HTTP host: plugin descriptors and local action dispatch.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
