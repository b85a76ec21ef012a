//! Business logic services
//!
//! Services sit between the HTTP routes and the shared calculator.

pub mod metrics;

pub use metrics::HealthMetricsService;
