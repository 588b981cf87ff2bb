//! Fill orchestration and the public operation surface

/// The fill engine and its three operations
pub mod executor;
/// Caller-facing operation options
pub mod options;
/// Quality scoring of filled boards
pub mod quality;
/// Result and statistics types
pub mod report;
/// Curated block layouts and symmetry
pub mod templates;

pub use executor::FillEngine;
pub use options::{CandidateOptions, FillOptions, GenerateOptions, Symmetry};
pub use quality::QualityReport;
pub use report::{Candidate, CandidateList, FillReport, FillStats, Placement};
