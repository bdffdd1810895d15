//! Ingestion of uploaded conversation exports
//!
//! # Error Handling Strategy
//!
//! The pipeline separates fatal input problems from tolerable ones:
//!
//! - **Fatal**: input that is not UTF-8, not JSON, or not a top-level array is a
//!   [`ParseError`]. Input that parses but leaves no conversation with content is
//!   [`IngestError::EmptyResult`]. The two are distinct so callers can word them
//!   differently.
//!
//! - **Tolerated**: unreadable array elements, messages with an unknown sender and
//!   malformed attachments are skipped and logged with `tracing`. Missing optional
//!   fields fall back to empty values instead of failing.
//!
//! - **No side effects**: ingestion never touches the store. Callers persist the
//!   result only on success, so a failed upload leaves previous data intact.

pub mod deserializers;
pub mod export;
pub mod ingest;

pub use ingest::{IngestError, IngestReport, Ingested, ParseError, ingest, ingest_with_report};
