//! Defines the data structures and models used throughout the application.
//!
//! This includes the structures deserialized from the IQAir API, the query a user
//! asked for, and the severity scale used to describe an AQI value.

mod iqair;
mod query;
mod severity;

pub use iqair::*;
pub use query::*;
pub use severity::*;
