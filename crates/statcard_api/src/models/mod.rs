//! HTTP request and response models
//!
//! These types exist only in the HTTP layer. Query types accept every parameter as
//! optional text so that validation failures are reported as structured errors
//! instead of extractor rejections.

pub mod request;
pub mod response;

// Re-export commonly used types
pub use request::{ImageQuery, ImageRequest, ImageType, StatsQuery};
pub use response::HealthCheckResponse;
