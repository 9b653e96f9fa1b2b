//! rdap_report library: RDAP domain lookup response rendering
//!
//! This library turns one decoded RDAP domain lookup response (RFC 7483,
//! `GET /domain/{name}`) into a stable, human-readable text report. The
//! renderer tolerates partial and registry-controlled input: every field is
//! optional, malformed leaf values degrade to placeholder text, and entity
//! nesting is rendered to a bounded depth.
//!
//! # Example
//!
//! ```
//! use rdap_report::{format_domain, DomainRecord};
//!
//! let record = DomainRecord::from_json(r#"{"ldhName": "example.com"}"#)
//!     .expect("well-formed JSON");
//! let report = format_domain(record.as_ref());
//! assert_eq!(report, "Domain: example.com\n");
//! ```

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod initialization;
mod input;
pub mod rdap;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, InputError};
pub use input::read_record;
pub use rdap::{format_domain, DomainRecord};
