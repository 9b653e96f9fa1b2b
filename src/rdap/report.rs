//! Human-readable report assembly for RDAP domain records.
//!
//! The renderer walks the record section by section in a fixed order,
//! emitting zero or more lines per section depending on field presence.
//! A section with nothing to show contributes nothing, not even its
//! header. The walk never fails: absent fields are skipped and malformed
//! leaf values degrade to placeholder text.

use serde_json::Value;

use super::date::display_event_date;
use super::types::{DomainRecord, DsRecord, Entity, Notice, PublicId};
use super::vcard::{self, ContactProperty};

/// Report returned when no record is supplied at all.
pub const NO_DATA_MESSAGE: &str = "No RDAP data available";

/// Placeholder for absent name-like leaf values.
const UNKNOWN: &str = "Unknown";

/// Contact properties decoded for top-level entities.
const TOP_LEVEL_PROPERTIES: &[ContactProperty] = &[
    ContactProperty::FullName,
    ContactProperty::Organization,
    ContactProperty::Address,
    ContactProperty::Phone,
    ContactProperty::Email,
    ContactProperty::Url,
];

/// Contact properties decoded for nested sub-entities. Intentionally
/// narrower than the top-level set.
const SUB_ENTITY_PROPERTIES: &[ContactProperty] = &[
    ContactProperty::FullName,
    ContactProperty::Email,
    ContactProperty::Phone,
];

/// Section renderers in display order. Each returns whether it emitted
/// content for this record.
const SECTIONS: &[fn(&DomainRecord, &mut Report) -> bool] = &[
    render_header,
    render_status,
    render_events,
    render_nameservers,
    render_dnssec,
    render_public_ids,
    render_entities,
    render_links,
    render_notices,
    render_conformance,
];

/// Formats one RDAP domain record as a human-readable text block.
///
/// Passing `None` (the absent record) short-circuits to the literal
/// `"No RDAP data available"`. Otherwise the record is walked in a fixed
/// section order; sections without content are omitted entirely. If the
/// walk renders nothing at all, the report falls back to a pretty-printed
/// dump of the record so the caller never receives an empty string.
///
/// The function is pure: no I/O, no shared state, deterministic output for
/// a given record.
pub fn format_domain(record: Option<&DomainRecord>) -> String {
    let Some(record) = record else {
        return NO_DATA_MESSAGE.to_string();
    };

    let mut out = Report::default();
    let mut rendered = false;
    for render in SECTIONS {
        rendered |= render(record, &mut out);
    }

    if !rendered {
        log::debug!("record has no renderable fields, falling back to raw dump");
        return raw_dump(record);
    }
    out.into_text()
}

/// Line buffer for one formatting pass.
#[derive(Default)]
struct Report {
    lines: Vec<String>,
}

impl Report {
    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Starts a new section: blank separator line, then the header line.
    fn section(&mut self, header: impl Into<String>) {
        self.lines.push(String::new());
        self.lines.push(header.into());
    }

    fn into_text(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Filters an optional list down to a non-empty slice.
fn non_empty<T>(list: Option<&[T]>) -> Option<&[T]> {
    list.filter(|items| !items.is_empty())
}

fn raw_dump(record: &DomainRecord) -> String {
    serde_json::to_string_pretty(record).unwrap_or_else(|_| NO_DATA_MESSAGE.to_string())
}

/// Basic domain identification. The `Domain:` line is always emitted, but
/// the header only counts as content when one of its fields is present.
fn render_header(record: &DomainRecord, out: &mut Report) -> bool {
    let name = record
        .ldh_name
        .as_deref()
        .or(record.handle.as_deref())
        .unwrap_or(UNKNOWN);
    out.line(format!("Domain: {name}"));
    if let Some(handle) = &record.handle {
        out.line(format!("Handle: {handle}"));
    }
    if let Some(class) = &record.object_class_name {
        out.line(format!("Object Class: {class}"));
    }
    record.ldh_name.is_some() || record.handle.is_some() || record.object_class_name.is_some()
}

fn render_status(record: &DomainRecord, out: &mut Report) -> bool {
    let Some(codes) = non_empty(record.status.as_deref()) else {
        return false;
    };
    out.line(format!("Status: {}", codes.join(", ")));
    true
}

fn render_events(record: &DomainRecord, out: &mut Report) -> bool {
    let Some(events) = non_empty(record.events.as_deref()) else {
        return false;
    };
    out.section("Events:");
    for event in events {
        let action = event.event_action.as_deref().unwrap_or(UNKNOWN);
        let date = display_event_date(event.event_date.as_deref());
        out.line(format!("  {action}: {date}"));
        if let Some(actor) = &event.event_actor {
            out.line(format!("    Actor: {actor}"));
        }
    }
    true
}

fn render_nameservers(record: &DomainRecord, out: &mut Report) -> bool {
    let Some(servers) = non_empty(record.nameservers.as_deref()) else {
        return false;
    };
    out.section("Nameservers:");
    for server in servers {
        out.line(format!(
            "  - {}",
            server.ldh_name.as_deref().unwrap_or(UNKNOWN)
        ));
        if let Some(addresses) = &server.ip_addresses {
            if let Some(v4) = non_empty(addresses.v4.as_deref()) {
                out.line(format!("    IPv4: {}", v4.join(", ")));
            }
            if let Some(v6) = non_empty(addresses.v6.as_deref()) {
                out.line(format!("    IPv6: {}", v6.join(", ")));
            }
        }
        if let Some(handle) = &server.handle {
            out.line(format!("    Handle: {handle}"));
        }
        if let Some(status) = non_empty(server.status.as_deref()) {
            out.line(format!("    Status: {}", status.join(", ")));
        }
    }
    true
}

fn render_dnssec(record: &DomainRecord, out: &mut Report) -> bool {
    let Some(secure_dns) = &record.secure_dns else {
        return false;
    };
    out.section("DNSSEC:");
    let signed = if secure_dns.delegation_signed.unwrap_or(false) {
        "Yes"
    } else {
        "No"
    };
    out.line(format!("  Signed: {signed}"));
    if let Some(ds_records) = non_empty(secure_dns.ds_data.as_deref()) {
        out.line("  DS Data:");
        for ds in ds_records {
            render_ds_record(ds, out);
        }
    }
    true
}

fn render_ds_record(ds: &DsRecord, out: &mut Report) {
    out.line(format!(
        "    - Key Tag: {}, Algorithm: {}, Digest Type: {}",
        ds_field_text(ds.key_tag.as_ref()),
        ds_field_text(ds.algorithm.as_ref()),
        ds_field_text(ds.digest_type.as_ref()),
    ));
    if let Some(digest) = &ds.digest {
        out.line(format!("      Digest: {digest}"));
    }
}

/// DS numeric fields arrive as JSON numbers or strings; anything else
/// renders as a dash.
fn ds_field_text(value: Option<&Value>) -> String {
    value
        .and_then(vcard::scalar_text)
        .unwrap_or_else(|| "-".to_string())
}

fn render_public_ids(record: &DomainRecord, out: &mut Report) -> bool {
    let Some(ids) = non_empty(record.public_ids.as_deref()) else {
        return false;
    };
    out.section("Public IDs:");
    for fragment in public_id_fragments(ids) {
        out.line(format!("  {fragment}"));
    }
    true
}

/// `<type>: <identifier>` fragments for a public id list; ids without an
/// identifier are skipped.
fn public_id_fragments(ids: &[PublicId]) -> Vec<String> {
    ids.iter()
        .filter_map(|id| {
            let identifier = id.identifier.as_deref()?;
            let label = id.id_type.as_deref().unwrap_or(UNKNOWN);
            Some(format!("{label}: {identifier}"))
        })
        .collect()
}

/// Rendering depth within the entity tree. Top-level entities show the
/// full registration detail; sub-entities show a reduced contact set and
/// are the last level traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntityDepth {
    Top,
    Nested,
}

impl EntityDepth {
    fn properties(self) -> &'static [ContactProperty] {
        match self {
            EntityDepth::Top => TOP_LEVEL_PROPERTIES,
            EntityDepth::Nested => SUB_ENTITY_PROPERTIES,
        }
    }

    fn indent(self) -> &'static str {
        match self {
            EntityDepth::Top => "    ",
            EntityDepth::Nested => "      ",
        }
    }

    /// Handle, public ids, and remarks are only shown at the top level.
    fn shows_registration_details(self) -> bool {
        matches!(self, EntityDepth::Top)
    }

    /// The next level down, if any. `Nested` is terminal, which bounds the
    /// recursion on arbitrarily deep or cyclic-equivalent input.
    fn deeper(self) -> Option<EntityDepth> {
        match self {
            EntityDepth::Top => Some(EntityDepth::Nested),
            EntityDepth::Nested => None,
        }
    }
}

fn render_entities(record: &DomainRecord, out: &mut Report) -> bool {
    let Some(entities) = non_empty(record.entities.as_deref()) else {
        return false;
    };
    out.section("Entities:");
    for entity in entities {
        render_entity(entity, EntityDepth::Top, out);
    }
    true
}

fn render_entity(entity: &Entity, depth: EntityDepth, out: &mut Report) {
    let roles = entity.roles.as_deref().unwrap_or_default().join(", ");
    match depth {
        EntityDepth::Top => out.line(format!("  [{roles}]")),
        EntityDepth::Nested => out.line(format!("    - Sub-entity [{roles}]")),
    }

    let indent = depth.indent();
    if depth.shows_registration_details() {
        if let Some(handle) = &entity.handle {
            out.line(format!("{indent}Handle: {handle}"));
        }
        for fragment in public_id_fragments(entity.public_ids.as_deref().unwrap_or_default()) {
            out.line(format!("{indent}{fragment}"));
        }
    }

    if let Some(vcard) = &entity.vcard_array {
        for fragment in vcard::contact_lines(vcard, depth.properties()) {
            out.line(format!("{indent}{fragment}"));
        }
    }

    if depth.shows_registration_details() {
        for remark in entity.remarks.as_deref().unwrap_or_default() {
            render_entity_remark(remark, indent, out);
        }
    }

    if let Some(deeper) = depth.deeper() {
        for sub_entity in entity.entities.as_deref().unwrap_or_default() {
            render_entity(sub_entity, deeper, out);
        }
    }
}

fn render_entity_remark(remark: &Notice, indent: &str, out: &mut Report) {
    let description = remark.description.as_deref().unwrap_or_default();
    match &remark.title {
        Some(title) => out.line(format!("{indent}Remarks: {title}")),
        None if !description.is_empty() => out.line(format!("{indent}Remarks:")),
        None => return,
    }
    for paragraph in description {
        out.line(format!("{indent}  {paragraph}"));
    }
}

fn render_links(record: &DomainRecord, out: &mut Report) -> bool {
    let Some(links) = non_empty(record.links.as_deref()) else {
        return false;
    };
    out.section("Links:");
    for link in links {
        let Some(href) = &link.href else {
            continue;
        };
        out.line(format!("  - {}: {href}", link.rel.as_deref().unwrap_or("link")));
        if let Some(media_type) = &link.media_type {
            out.line(format!("    Type: {media_type}"));
        }
    }
    true
}

/// Domain-level notices followed by domain-level remarks, as one section.
fn render_notices(record: &DomainRecord, out: &mut Report) -> bool {
    let notices = record.notices.as_deref().unwrap_or_default();
    let remarks = record.remarks.as_deref().unwrap_or_default();
    if notices.is_empty() && remarks.is_empty() {
        return false;
    }
    out.section("Notices and Remarks:");
    for notice in notices.iter().chain(remarks) {
        if let Some(title) = &notice.title {
            out.line(format!("  - {title}"));
        }
        for paragraph in notice.description.as_deref().unwrap_or_default() {
            out.line(format!("    {paragraph}"));
        }
        for link in notice.links.as_deref().unwrap_or_default() {
            if let Some(href) = &link.href {
                out.line(format!("    URL: {href}"));
            }
        }
    }
    true
}

fn render_conformance(record: &DomainRecord, out: &mut Report) -> bool {
    let Some(values) = non_empty(record.rdap_conformance.as_deref()) else {
        return false;
    };
    out.section(format!("RDAP Conformance: {}", values.join(", ")));
    true
}
