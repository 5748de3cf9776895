//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Query-parameter types for the list endpoints where applicable
//!
//! Entities and DTOs serialize camelCase to match the public wire format
//! (`avgSafety`, `fairPay`, `sessionId`, ...).

pub mod art_story;
pub mod gig_session;
pub mod incident_report;
pub mod opportunity;
pub mod tip;
pub mod venue;
pub mod venue_rating;
