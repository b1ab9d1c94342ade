//! # th-schema
//!
//! Declared response shapes for TrustHire analysis kinds.
//!
//! This crate provides:
//! - `SchemaRegistry`: the output shape declared for each analysis kind,
//!   generated from th-core types at construction time
//! - Validation of raw service replies against the declared shape
//!
//! ## Architecture
//!
//! Result types are defined in `th-core` with `#[derive(JsonSchema)]`. This
//! crate imports those types and provides the registry and validation layer.
//! The request builder embeds a registered shape in outgoing requests; the
//! reply decoder validates incoming bodies against the same shape, so the two
//! sides can never drift apart.
//!
//! The company-legitimacy kind deliberately has no registered shape: that
//! analysis returns free narrative text, and [`SchemaRegistry::get`] returns
//! `None` for it.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
