//! workforce-core — deterministic support-team staffing analysis.
//!
//! The pipeline is a pure transformation: raw field→value records go in,
//! a `BatchResult` of scored teams plus rejected-record diagnostics comes
//! out. Decoding CSV/JSON text and rendering the report are collaborator
//! concerns that live outside this crate (see the wfo-runner tool).
//!
//! RULES:
//!   - No I/O anywhere in this crate.
//!   - The validator and calculator return tagged error values for bad
//!     input — they never panic on malformed records.
//!   - One bad record never aborts a batch.

pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod record;
pub mod recommendation;
pub mod validator;
