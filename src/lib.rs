//! taxi-park analytics
//!
//! Read-only queries answering business questions about a taxi park:
//! idle drivers, loyal and discount-hunting passengers, popular trip
//! durations and income concentration.

pub mod error;
pub mod model;
pub mod queries;
pub mod report;
