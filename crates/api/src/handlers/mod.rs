//! Request handlers, grouped by resource.

pub mod checkin;
pub mod incidents;
pub mod opportunities;
pub mod ratings;
pub mod stories;
pub mod tips;
pub mod venues;
