//! RDAP domain response model and text rendering.
//!
//! This module provides:
//! - A serde record model mirroring the RDAP domain response shape
//! - A jCard (vCard-in-JSON) contact decoder
//! - The report renderer that turns one record into a text block

mod date;
mod report;
mod types;
mod vcard;

pub use report::{format_domain, NO_DATA_MESSAGE};
pub use types::{
    DomainRecord, DsRecord, Entity, Event, IpAddresses, Link, Nameserver, Notice, PublicId,
    SecureDns,
};
