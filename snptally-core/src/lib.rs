//! Core infrastructure for snptally: shared data models and io helpers.
//!
//! This crate holds the value types the rest of the workspace passes around —
//! aligned read spans, per-reference candidate coordinate sets, per-sample base
//! tallies — plus the dynamic plain/gzip reader every input path goes through.
//! Higher-level crates (`snptally-overlap`, `snptally-tally`) build on these
//! but should not redefine them.

pub mod models;
pub mod utils;
