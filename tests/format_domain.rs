//! End-to-end tests for RDAP domain report rendering through the public API.

use rdap_report::{format_domain, DomainRecord};

/// A realistic registry response exercising every report section.
const FULL_RESPONSE: &str = r#"{
    "rdapConformance": ["rdap_level_0", "icann_rdap_response_profile_0"],
    "objectClassName": "domain",
    "handle": "2336799_DOMAIN_COM-VRSN",
    "ldhName": "EXAMPLE.COM",
    "status": ["client delete prohibited", "client transfer prohibited"],
    "events": [
        {"eventAction": "registration", "eventDate": "1995-08-14T04:00:00Z"},
        {"eventAction": "expiration", "eventDate": "2026-08-13T04:00:00Z"},
        {
            "eventAction": "last changed",
            "eventDate": "2025-08-14T07:01:44Z",
            "eventActor": "Internet Assigned Numbers Authority"
        }
    ],
    "nameservers": [
        {"objectClassName": "nameserver", "ldhName": "A.IANA-SERVERS.NET"},
        {
            "objectClassName": "nameserver",
            "ldhName": "B.IANA-SERVERS.NET",
            "ipAddresses": {"v4": ["199.43.133.53"], "v6": ["2001:500:8d::53"]}
        }
    ],
    "secureDNS": {
        "delegationSigned": true,
        "dsData": [
            {
                "keyTag": 370,
                "algorithm": 13,
                "digestType": 2,
                "digest": "BE74359954660069D5C63D200C39F560"
            }
        ]
    },
    "entities": [
        {
            "objectClassName": "entity",
            "handle": "376",
            "roles": ["registrar"],
            "publicIds": [{"type": "IANA Registrar ID", "identifier": "376"}],
            "vcardArray": ["vcard", [
                ["version", {}, "text", "4.0"],
                ["fn", {}, "text", "Internet Assigned Numbers Authority"]
            ]],
            "entities": [
                {
                    "objectClassName": "entity",
                    "roles": ["abuse"],
                    "vcardArray": ["vcard", [
                        ["version", {}, "text", "4.0"],
                        ["fn", {}, "text", "IANA Abuse Desk"],
                        ["tel", {"type": "voice"}, "uri", "tel:+1.2024831840"],
                        ["email", {}, "text", "abusecomplaints@iana.org"]
                    ]]
                }
            ]
        }
    ],
    "links": [
        {
            "value": "https://rdap.verisign.com/com/v1/domain/EXAMPLE.COM",
            "rel": "self",
            "href": "https://rdap.verisign.com/com/v1/domain/EXAMPLE.COM",
            "type": "application/rdap+json"
        }
    ],
    "notices": [
        {
            "title": "Terms of Use",
            "description": ["Service subject to Terms of Use."],
            "links": [{"href": "https://www.verisign.com/rdap-terms"}]
        }
    ]
}"#;

#[test]
fn test_full_response_renders_every_section_in_order() {
    let record = DomainRecord::from_json(FULL_RESPONSE)
        .expect("well-formed JSON")
        .expect("non-null record");
    let report = format_domain(Some(&record));

    let expected = "\
Domain: EXAMPLE.COM
Handle: 2336799_DOMAIN_COM-VRSN
Object Class: domain
Status: client delete prohibited, client transfer prohibited

Events:
  registration: 1995-08-14 04:00:00 UTC
  expiration: 2026-08-13 04:00:00 UTC
  last changed: 2025-08-14 07:01:44 UTC
    Actor: Internet Assigned Numbers Authority

Nameservers:
  - A.IANA-SERVERS.NET
  - B.IANA-SERVERS.NET
    IPv4: 199.43.133.53
    IPv6: 2001:500:8d::53

DNSSEC:
  Signed: Yes
  DS Data:
    - Key Tag: 370, Algorithm: 13, Digest Type: 2
      Digest: BE74359954660069D5C63D200C39F560

Entities:
  [registrar]
    Handle: 376
    IANA Registrar ID: 376
    Name: Internet Assigned Numbers Authority
    - Sub-entity [abuse]
      Name: IANA Abuse Desk
      Phone (voice): +1.2024831840
      Email: abusecomplaints@iana.org

Links:
  - self: https://rdap.verisign.com/com/v1/domain/EXAMPLE.COM
    Type: application/rdap+json

Notices and Remarks:
  - Terms of Use
    Service subject to Terms of Use.
    URL: https://www.verisign.com/rdap-terms

RDAP Conformance: rdap_level_0, icann_rdap_response_profile_0
";
    assert_eq!(report, expected);
}

#[test]
fn test_full_response_formatting_is_idempotent() {
    let record = DomainRecord::from_json(FULL_RESPONSE).unwrap().unwrap();
    let first = format_domain(Some(&record));
    let second = format_domain(Some(&record));
    assert_eq!(first, second);
}

#[test]
fn test_absent_record_short_circuits() {
    assert_eq!(format_domain(None), "No RDAP data available");
}

#[test]
fn test_null_document_formats_as_absent_record() {
    let record = DomainRecord::from_json("null").unwrap();
    assert_eq!(format_domain(record.as_ref()), "No RDAP data available");
}

#[test]
fn test_empty_document_falls_back_to_structure_dump() {
    let record = DomainRecord::from_json("{}").unwrap();
    assert_eq!(format_domain(record.as_ref()), "{}");
}

#[test]
fn test_minimal_record_is_header_only() {
    let record = DomainRecord::from_json(r#"{"ldhName": "example.com"}"#)
        .unwrap()
        .unwrap();
    assert_eq!(format_domain(Some(&record)), "Domain: example.com\n");
}

#[test]
fn test_unknown_registry_extensions_are_ignored() {
    let record = DomainRecord::from_json(
        r#"{
            "ldhName": "example.com",
            "port43": "whois.example.com",
            "lang": "en",
            "unicodeName": "example.com"
        }"#,
    )
    .unwrap()
    .unwrap();
    assert_eq!(format_domain(Some(&record)), "Domain: example.com\n");
}
