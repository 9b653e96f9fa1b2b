//! Tests for RDAP document loading from disk.

use std::io::Write;
use std::path::Path;

use rdap_report::{read_record, InputError};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_read_record_round_trip() {
    let file = write_temp(
        r#"{
            "ldhName": "example.com",
            "status": ["active"],
            "secureDNS": {"delegationSigned": false}
        }"#,
    );
    let record = read_record(file.path()).unwrap().unwrap();
    assert_eq!(record.ldh_name.as_deref(), Some("example.com"));
    assert_eq!(record.status, Some(vec!["active".to_string()]));
    let secure_dns = record.secure_dns.expect("secureDNS present");
    assert_eq!(secure_dns.delegation_signed, Some(false));
}

#[test]
fn test_read_record_null_is_absent() {
    let file = write_temp("null");
    assert!(read_record(file.path()).unwrap().is_none());
}

#[test]
fn test_read_record_missing_file_is_io_error() {
    let result = read_record(Path::new("/nonexistent/rdap-response.json"));
    match result {
        Err(InputError::Io { path, .. }) => {
            assert_eq!(path, Path::new("/nonexistent/rdap-response.json"));
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_read_record_malformed_json_is_json_error() {
    let file = write_temp(r#"{"ldhName": "#);
    assert!(matches!(read_record(file.path()), Err(InputError::Json(_))));
}

#[test]
fn test_read_record_shape_mismatch_is_json_error() {
    // A top-level array is well-formed JSON but not a domain record
    let file = write_temp(r#"["not", "a", "record"]"#);
    assert!(matches!(read_record(file.path()), Err(InputError::Json(_))));
}
