//! Keyword candidate aggregation, occurrence mapping, and filtering.

pub mod candidates;
pub mod filter;
pub mod occurrence;

pub use candidates::CandidateSet;
pub use filter::FilterThresholds;
pub use occurrence::OccurrenceMap;
