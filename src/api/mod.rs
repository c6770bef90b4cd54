//! Provides clients and utilities for interacting with external APIs.
//!
//! Includes:
//! - `iqair`: Client for the IQAir (AirVisual) v2 API.

mod iqair;

pub use iqair::*;
