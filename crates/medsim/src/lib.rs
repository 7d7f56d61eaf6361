//! Domain library for the simulated patient exam service.
//!
//! The [`evaluation`] module owns the metric catalog and the score aggregator
//! that turns an upstream evaluator's metric scores into per-domain results.
//! Alongside it, [`conversation`] backs the review screen while [`exams`] and
//! [`chats`] store submitted answer sheets and interview transcripts.

pub mod chats;
pub mod config;
pub mod conversation;
pub mod error;
pub mod evaluation;
pub mod exams;
pub mod telemetry;
