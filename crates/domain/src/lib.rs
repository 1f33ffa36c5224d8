//! # Domain
//!
//! Text measurement and readability scoring, free of any I/O.
//!
//! - [`text`]: sentence/word/character splitting and syllable estimation
//! - [`model`]: [`model::TextStatistics`] and score value objects
//! - [`analytics`]: the four readability formulas and the age table
//! - [`options`]: score selection and output format

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod options;
pub mod text;
pub mod value_objects;
