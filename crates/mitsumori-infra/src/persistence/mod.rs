//! Persistence implementations
//!
//! This module provides file-based implementations of the repository traits.

mod file_estimate_recorder;
mod file_reference_repo;

pub use file_estimate_recorder::FileEstimateRecorder;
pub use file_reference_repo::FileReferenceRepository;
