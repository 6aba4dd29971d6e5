//! Streaming synthesizer for the incidentforge dataset.
//!
//! This crate drives row synthesis across the full row count in fixed-size
//! batches and appends each batch to a delimited output file, keeping memory
//! bounded by the batch size.

pub mod engine;
pub mod errors;
pub mod model;
pub mod output;
pub mod synth;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport};
