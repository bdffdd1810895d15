//! The upload boundary: read a file, ingest it, persist the result
//!
//! Every failure is turned into exactly one user-facing message by
//! [`ImportError::user_message`]. The store is written only after ingestion
//! succeeds, so a rejected file never disturbs previously imported data.

pub mod upload;

pub use upload::{ImportError, ImportSummary, import_bytes, import_file};
