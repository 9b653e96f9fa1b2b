//! RDAP record input.
//!
//! Reads one RDAP JSON document from a file or stdin and deserializes it
//! into the typed record model. A literal `null` document is the absent
//! record rather than an error; malformed JSON is reported to the caller.

use std::io::Read;
use std::path::Path;

use crate::error_handling::InputError;
use crate::rdap::DomainRecord;

/// Reads and decodes one RDAP domain document.
///
/// A path of `-` reads stdin. Returns `Ok(None)` for a document containing
/// the literal `null` (the absent record).
///
/// # Errors
///
/// Returns `InputError::Io` if the document cannot be read, or
/// `InputError::Json` if it is not well-formed JSON matching the record
/// shape.
pub fn read_record(path: &Path) -> Result<Option<DomainRecord>, InputError> {
    let raw = if path.as_os_str() == "-" {
        log::debug!("Reading RDAP document from stdin");
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| InputError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        buffer
    } else {
        log::debug!("Reading RDAP document from {}", path.display());
        std::fs::read_to_string(path).map_err(|source| InputError::Io {
            path: path.to_path_buf(),
            source,
        })?
    };

    let record = DomainRecord::from_json(&raw)?;
    if record.is_none() {
        log::warn!("Input document is null; no RDAP data to format");
    }
    Ok(record)
}
