//! MapAnalyzer CLI library.
//!
//! This crate provides the command-line helpers shared by the
//! `mapanalyzer-cli` binary, currently output format selection.

pub mod output;
