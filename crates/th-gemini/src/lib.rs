//! # th-gemini
//!
//! Client for the external reasoning service.
//!
//! The crate covers the full request/reply cycle for one analysis call:
//! - [`request`]: kind-specific request construction: instruction text,
//!   optional inline media, web-grounding flag, declared output shape
//! - [`client`]: HTTP transport to the `generateContent` endpoint
//! - [`decode`]: strict parse-and-validate of structured reply bodies into
//!   the closed [`th_core::analysis::AnalysisResult`] sum type
//! - [`citations`]: normalization of grounding metadata into citation lists
//!
//! No retries, no backoff, no deduplication: a call either completes or
//! fails exactly once, and every failure is local to that call.

pub mod citations;
pub mod client;
pub mod decode;
pub mod request;

mod error;
mod http;

pub use client::{GeminiClient, RawReply};
pub use error::GeminiError;
pub use request::{AnalysisRequest, InlineMedia};
