//! RDAP domain response data structures.
//!
//! These types mirror the shape of an RDAP domain lookup response
//! (RFC 7483, `GET /domain/{name}`). Every field is optional: registries
//! omit whole sub-structures freely, and the renderer treats absent and
//! `null` uniformly as "not present". Serialization skips absent fields so
//! a round-trip of an empty record stays `{}`.

use serde::{Deserialize, Serialize};

/// Top-level RDAP domain lookup response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    /// Domain name in LDH (letters-digits-hyphen) form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldh_name: Option<String>,

    /// Registry object identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// RDAP object class (normally "domain")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_class_name: Option<String>,

    /// EPP status codes (e.g., "clientTransferProhibited")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<String>>,

    /// Lifecycle events (registration, expiration, last changed, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,

    /// Delegated nameservers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<Nameserver>>,

    /// DNSSEC delegation state (wire name "secureDNS")
    #[serde(rename = "secureDNS", skip_serializing_if = "Option::is_none")]
    pub secure_dns: Option<SecureDns>,

    /// Registry-scoped public identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ids: Option<Vec<PublicId>>,

    /// Registrant, registrar, and contact entities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,

    /// Related resources (self, related, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,

    /// Service notices attached to the response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notices: Option<Vec<Notice>>,

    /// Remarks attached to the domain object
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<Vec<Notice>>,

    /// RDAP conformance level identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rdap_conformance: Option<Vec<String>>,
}

impl DomainRecord {
    /// Parses one RDAP JSON document.
    ///
    /// A literal `null` document yields `Ok(None)`, the absent record.
    /// Unknown keys are ignored; a document that is not well-formed JSON
    /// or does not match the record shape is an error.
    pub fn from_json(json: &str) -> serde_json::Result<Option<DomainRecord>> {
        serde_json::from_str(json)
    }
}

/// A lifecycle event attached to a domain or entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event kind (e.g., "registration", "expiration")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_action: Option<String>,

    /// Event timestamp as supplied by the registry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,

    /// Actor responsible for the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_actor: Option<String>,
}

/// A delegated nameserver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nameserver {
    /// Nameserver host name in LDH form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ldh_name: Option<String>,

    /// Glue addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_addresses: Option<IpAddresses>,

    /// Registry object identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Nameserver status codes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<String>>,
}

/// IPv4/IPv6 glue addresses of a nameserver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IpAddresses {
    /// IPv4 addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v4: Option<Vec<String>>,

    /// IPv6 addresses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v6: Option<Vec<String>>,
}

/// DNSSEC delegation information.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecureDns {
    /// Whether a signed delegation exists (absent counts as unsigned)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegation_signed: Option<bool>,

    /// Delegation Signer records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ds_data: Option<Vec<DsRecord>>,
}

/// A DNSSEC Delegation Signer record.
///
/// Registries emit the numeric fields either as JSON numbers or as strings,
/// so they are kept as raw values and rendered as bare scalars.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DsRecord {
    /// Key tag of the signing key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_tag: Option<serde_json::Value>,

    /// DNSSEC algorithm number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<serde_json::Value>,

    /// Digest type number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest_type: Option<serde_json::Value>,

    /// Digest as a hex string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

/// A registry-scoped public identifier (e.g., an IANA registrar id).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicId {
    /// Identifier type label
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub id_type: Option<String>,

    /// Identifier value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// An RDAP actor record (registrant, registrar, technical contact, ...).
///
/// Entities nest recursively via `entities`; rendering visits at most one
/// nested level regardless of how deep the input structure goes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Role tags (e.g., "registrant", "technical")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<String>>,

    /// Registry object identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,

    /// Registry-scoped public identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ids: Option<Vec<PublicId>>,

    /// jCard contact data: `["vcard", [[name, params, type, value], ...]]`.
    /// Kept as raw JSON because the tuple encoding is irregular by
    /// construction; decoding happens defensively at render time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcard_array: Option<serde_json::Value>,

    /// Remarks attached to the entity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<Vec<Notice>>,

    /// Nested sub-entities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
}

/// A related resource reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Link relation (defaults to "link" in the report)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,

    /// Target URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// MIME type of the target
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

/// A notice or remark: a titled block of paragraph lines with optional links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    /// Notice title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Paragraph lines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<String>>,

    /// Attached links, rendered URL-only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_null_is_absent_record() {
        let record = DomainRecord::from_json("null").unwrap();
        assert!(record.is_none());
    }

    #[test]
    fn test_from_json_empty_object() {
        let record = DomainRecord::from_json("{}").unwrap().unwrap();
        assert!(record.ldh_name.is_none());
        assert!(record.status.is_none());
        assert!(record.entities.is_none());
    }

    #[test]
    fn test_from_json_camel_case_fields() {
        let json = r#"{
            "ldhName": "example.com",
            "objectClassName": "domain",
            "rdapConformance": ["rdap_level_0"],
            "secureDNS": {"delegationSigned": true}
        }"#;
        let record = DomainRecord::from_json(json).unwrap().unwrap();
        assert_eq!(record.ldh_name.as_deref(), Some("example.com"));
        assert_eq!(record.object_class_name.as_deref(), Some("domain"));
        assert_eq!(
            record.rdap_conformance,
            Some(vec!["rdap_level_0".to_string()])
        );
        let secure_dns = record.secure_dns.expect("secureDNS should deserialize");
        assert_eq!(secure_dns.delegation_signed, Some(true));
    }

    #[test]
    fn test_from_json_unknown_keys_ignored() {
        let json = r#"{"ldhName": "example.com", "port43": "whois.example", "lang": "en"}"#;
        let record = DomainRecord::from_json(json).unwrap().unwrap();
        assert_eq!(record.ldh_name.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_from_json_malformed_is_error() {
        assert!(DomainRecord::from_json("{not json").is_err());
        assert!(DomainRecord::from_json("").is_err());
    }

    #[test]
    fn test_empty_record_serializes_to_empty_object() {
        let record = DomainRecord::default();
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_null_fields_load_as_absent() {
        let json = r#"{"ldhName": null, "status": null, "secureDNS": null}"#;
        let record = DomainRecord::from_json(json).unwrap().unwrap();
        assert!(record.ldh_name.is_none());
        assert!(record.status.is_none());
        assert!(record.secure_dns.is_none());
    }

    #[test]
    fn test_ds_record_accepts_numbers_and_strings() {
        let json = r#"{"keyTag": 12345, "algorithm": "13", "digestType": 2}"#;
        let ds: DsRecord = serde_json::from_str(json).unwrap();
        assert!(ds.key_tag.is_some());
        assert!(ds.algorithm.is_some());
        assert!(ds.digest_type.is_some());
        assert!(ds.digest.is_none());
    }
}
