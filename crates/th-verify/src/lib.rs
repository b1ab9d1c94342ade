//! # th-verify
//!
//! Orchestration facade for TrustHire.
//!
//! [`VerifyService`] exposes one operation per analysis kind (email-safety
//! check, job-posting scam audit, career-path guidance, upskilling-resource
//! discovery, company-legitimacy lookup). Each composes request builder →
//! service call → reply decoder → citation extractor, and, where the kind
//! calls for it, appends an entry to the identity's bounded history.
//!
//! Account flows (sign-in, sign-up with the email-safety gate, skill edits,
//! sign-out) live in [`account`] and drive the same store.

mod account;
mod error;
mod service;

pub use error::VerifyError;
pub use service::VerifyService;
