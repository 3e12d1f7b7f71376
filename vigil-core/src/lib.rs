//! Vigil Core
//!
//! Core types for the Vigil build watcher.
//!
//! This crate contains:
//! - Job references: normalized paths identifying a single Jenkins job
//! - Build status: the wire model of the `lastBuild` JSON endpoint and the
//!   poll-cycle sentinel derived from it

pub mod build;
pub mod job;
