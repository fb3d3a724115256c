//! OMA DDF XML parser.
//!
//! This module parses LwM2M object definition files (DDF XML) into the
//! internal [`ObjectDef`] representation.

use crate::error::ParseError;
use crate::object::{ObjectDef, ResourceDef};
use crate::types::{Cardinality, Operations, Presence, ValueType};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parses an LwM2M object definition from DDF XML.
///
/// Only the first `Object` element of the document is consumed; any
/// trailing sibling objects are ignored.  Resources are returned sorted
/// ascending by resource ID regardless of document order.
///
/// # Arguments
/// * `xml` - DDF XML content
///
/// # Returns
/// Parsed object definition or parse error.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, a required element or
/// attribute is missing, or an enumerated value is outside its closed
/// set.
pub fn parse_object(xml: &str) -> Result<ObjectDef, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name == "Object" {
                    return parse_object_element(&mut reader);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Err(ParseError::InvalidStructure {
        message: "No Object element found".to_string(),
    })
}

/// Parses the body of an `Object` element.
fn parse_object_element(reader: &mut Reader<&[u8]>) -> Result<ObjectDef, ParseError> {
    let mut name: Option<String> = None;
    let mut description = String::new();
    let mut oid: Option<u16> = None;
    let mut urn = String::new();
    let mut cardinality: Option<Cardinality> = None;
    let mut presence: Option<Presence> = None;
    let mut resources: Vec<ResourceDef> = Vec::new();

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag = std::str::from_utf8(&name_bytes)?;
                match tag {
                    "Name" => name = Some(read_text(reader)?),
                    "Description1" => description = read_text(reader)?,
                    "ObjectID" => {
                        let text = read_text(reader)?;
                        oid = Some(
                            text.trim()
                                .parse()
                                .map_err(|_| ParseError::invalid_element("ObjectID", &text))?,
                        );
                    }
                    "ObjectURN" => urn = read_text(reader)?,
                    "MultipleInstances" => {
                        let text = read_text(reader)?;
                        cardinality = Some(Cardinality::parse(text.trim()).ok_or_else(|| {
                            ParseError::invalid_element("MultipleInstances", &text)
                        })?);
                    }
                    "Mandatory" => {
                        let text = read_text(reader)?;
                        presence = Some(
                            Presence::parse(text.trim())
                                .ok_or_else(|| ParseError::invalid_element("Mandatory", &text))?,
                        );
                    }
                    "Resources" => parse_resources(reader, &mut resources)?,
                    _ => skip_element(reader)?,
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    let name = name.ok_or_else(|| ParseError::missing_element("Object", "Name"))?;
    let oid = oid.ok_or_else(|| ParseError::missing_element("Object", "ObjectID"))?;
    let cardinality =
        cardinality.ok_or_else(|| ParseError::missing_element("Object", "MultipleInstances"))?;
    let presence = presence.ok_or_else(|| ParseError::missing_element("Object", "Mandatory"))?;

    resources.sort_by_key(|res| res.rid);

    let mut object = ObjectDef::new(oid, name, cardinality, presence);
    object.urn = urn;
    object.description = description;
    object.resources = resources;

    Ok(object)
}

/// Parses the `Resources` section into resource definitions.
fn parse_resources(
    reader: &mut Reader<&[u8]>,
    resources: &mut Vec<ResourceDef>,
) -> Result<(), ParseError> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag = std::str::from_utf8(&name_bytes)?;
                if tag == "Item" {
                    resources.push(parse_item(reader, e)?);
                } else {
                    skip_element(reader)?;
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag = std::str::from_utf8(&name_bytes)?;
                if tag == "Item" {
                    return Err(ParseError::missing_element("Item", "Name"));
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Parses a single resource `Item` element.
fn parse_item(reader: &mut Reader<&[u8]>, e: &BytesStart<'_>) -> Result<ResourceDef, ParseError> {
    let mut rid: Option<u16> = None;

    for attr in e.attributes().flatten() {
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = std::str::from_utf8(&attr.value)?;
        if key == "ID" {
            rid = Some(
                value
                    .parse()
                    .map_err(|_| ParseError::invalid_attr("Item", "ID", value))?,
            );
        }
    }

    let rid = rid.ok_or_else(|| ParseError::missing_attr("Item", "ID"))?;

    let mut name: Option<String> = None;
    let mut operations: Option<Operations> = None;
    let mut cardinality: Option<Cardinality> = None;
    let mut presence: Option<Presence> = None;
    let mut kind: Option<ValueType> = None;
    let mut range_enumeration: Option<String> = None;
    let mut units: Option<String> = None;
    let mut description = String::new();

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let tag = std::str::from_utf8(&name_bytes)?;
                match tag {
                    "Name" => name = Some(read_text(reader)?),
                    "Operations" => {
                        let text = read_text(reader)?;
                        operations = Some(
                            Operations::parse(text.trim())
                                .ok_or_else(|| ParseError::invalid_element("Operations", &text))?,
                        );
                    }
                    "MultipleInstances" => {
                        let text = read_text(reader)?;
                        cardinality = Some(Cardinality::parse(text.trim()).ok_or_else(|| {
                            ParseError::invalid_element("MultipleInstances", &text)
                        })?);
                    }
                    "Mandatory" => {
                        let text = read_text(reader)?;
                        presence = Some(
                            Presence::parse(text.trim())
                                .ok_or_else(|| ParseError::invalid_element("Mandatory", &text))?,
                        );
                    }
                    "Type" => {
                        let text = read_text(reader)?;
                        if !text.trim().is_empty() {
                            kind = Some(
                                ValueType::parse(text.trim())
                                    .ok_or_else(|| ParseError::invalid_element("Type", &text))?,
                            );
                        }
                    }
                    "RangeEnumeration" => {
                        let text = read_text(reader)?;
                        if !text.is_empty() {
                            range_enumeration = Some(text);
                        }
                    }
                    "Units" => {
                        let text = read_text(reader)?;
                        if !text.is_empty() {
                            units = Some(text);
                        }
                    }
                    "Description" => description = read_text(reader)?,
                    _ => skip_element(reader)?,
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    let name = name.ok_or_else(|| ParseError::missing_element("Item", "Name"))?;
    let operations = operations.ok_or_else(|| ParseError::missing_element("Item", "Operations"))?;
    let cardinality =
        cardinality.ok_or_else(|| ParseError::missing_element("Item", "MultipleInstances"))?;
    let presence = presence.ok_or_else(|| ParseError::missing_element("Item", "Mandatory"))?;

    let mut res = ResourceDef::new(rid, name, operations, cardinality, presence);
    res.kind = kind;
    if let Some(range_enumeration) = range_enumeration {
        res.range_enumeration = range_enumeration;
    }
    if let Some(units) = units {
        res.units = units;
    }
    res.description = description;

    Ok(res)
}

/// Reads the text content of the current element, resolving predefined
/// entities and concatenating any CDATA sections.  Nested elements are
/// skipped.
fn read_text(reader: &mut Reader<&[u8]>) -> Result<String, ParseError> {
    let mut buf = Vec::new();
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(ref t)) => {
                text.push_str(&unescape_entities(std::str::from_utf8(t.as_ref())?));
            }
            Ok(Event::CData(ref t)) => {
                text.push_str(std::str::from_utf8(t.as_ref())?);
            }
            Ok(Event::Start(_)) => skip_element(reader)?,
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

/// Skips to the end of the current element.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}

/// Resolves the five predefined XML entities in raw text.  Anything
/// else, numeric character references included, is passed through
/// unchanged.
fn unescape_entities(text: &str) -> String {
    const ENTITIES: [(&str, char); 5] = [
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&amp;", '&'),
        ("&apos;", '\''),
        ("&quot;", '"'),
    ];

    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ENTITIES.iter().find(|(name, _)| rest.starts_with(name)) {
            Some((name, ch)) => {
                out.push(*ch);
                rest = &rest[name.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
