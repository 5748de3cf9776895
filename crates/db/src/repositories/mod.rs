//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Multi-statement writes
//! (rating insert + aggregate recompute, incident insert + counter
//! increment) run inside a single transaction.

pub mod art_story_repo;
pub mod gig_session_repo;
pub mod incident_report_repo;
pub mod opportunity_repo;
pub mod tip_repo;
pub mod venue_rating_repo;
pub mod venue_repo;

pub use art_story_repo::ArtStoryRepo;
pub use gig_session_repo::GigSessionRepo;
pub use incident_report_repo::IncidentReportRepo;
pub use opportunity_repo::OpportunityRepo;
pub use tip_repo::TipRepo;
pub use venue_rating_repo::VenueRatingRepo;
pub use venue_repo::VenueRepo;
