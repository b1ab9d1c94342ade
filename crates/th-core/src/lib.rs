//! # th-core
//!
//! Core types, ID generation, and error types for TrustHire.
//!
//! This crate provides the foundational types shared across all TrustHire crates:
//! - Identity and history entities owned by the session store
//! - Analysis result types for every verification kind, with the closed
//!   `AnalysisResult` sum type the reply decoder produces
//! - Kind/status enums with wire-string helpers
//! - ID prefix constants and generation helpers
//! - Cross-cutting error types

pub mod analysis;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
