//! Core utilities for the NBA stats CLI
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `http`: request headers and API base resolution
//! - `units`: imperial to metric conversions for player measurements

pub mod http;
pub mod units;

// Re-export commonly used items for convenience
pub use http::{common_headers, resolve_api_uri};
pub use units::{height_to_meters, weight_to_kilograms};
