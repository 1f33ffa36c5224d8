//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and port adapters:
//!
//! - [`orchestrator`]: load and measure a document, pick and compute scores
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{DocumentAnalysis, ScoreReport};
pub use orchestrator::{AnalyzeDocument, SELECTION_QUESTION, ScoreDocument, SelectScores};
