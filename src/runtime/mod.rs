//! Route-facing API surface and runtime adapters.

pub mod api;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_spawner;

pub use api::{
    register, CourseSummary, Health, RegisterRequest, RegisterResponse, StudentOverview,
};
#[cfg(feature = "tokio-runtime")]
pub use tokio_spawner::TokioSpawner;
