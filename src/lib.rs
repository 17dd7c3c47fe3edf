//! Quote Intake API Library
//!
//! This library provides the core functionality for the quote intake service:
//! client-side-equivalent form validation, payload normalization, dual-sink
//! submission, and static asset delivery for the site itself.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `intake`: Shared field validation engine for all form variants.
//! - `models`: Raw form value models and API responses.
//! - `payload`: Payload normalization and derived-field generation.
//! - `sinks`: Outbound sink clients (form endpoint, webhook).
//! - `static_files`: Static asset delivery with SPA fallback.
//! - `submit`: Dual-sink submission orchestration and lifecycle state.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod intake;
pub mod models;
pub mod payload;
pub mod sinks;
pub mod static_files;
pub mod submit;
