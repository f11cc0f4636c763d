//! The namespace header of an SBML document.
//!
//! Only the root element is read or written:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <sbml xmlns="http://www.sbml.org/sbml/level2/version4"
//!       xmlns:math="http://www.w3.org/1998/Math/MathML"
//!       level="2" version="4"/>
//! ```
//!
//! The SBML core namespace is the namespace of the `sbml` element itself
//! and must match the registry URI for the declared `level`/`version`.
//! Every other declaration is carried as an extra namespace.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesStart, Event};
use quick_xml::{Reader, Writer};
use tracing::debug;

use super::InterchangeError;
use crate::base::SbmlVersion;
use crate::sbml::SbmlNamespaces;
use crate::xml::XmlNamespaces;

const ROOT_ELEMENT: &str = "sbml";

/// Read the namespace context from the root `sbml` element of `input`.
///
/// Content after the root start tag is not inspected.
pub fn read_root(input: &[u8]) -> Result<SbmlNamespaces, InterchangeError> {
    let mut reader = Reader::from_reader(input);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e) | Event::Empty(ref e)) => {
                return RootHeader::from_start(e)?.into_namespaces();
            }
            Ok(Event::Eof) => return Err(InterchangeError::missing_element(ROOT_ELEMENT)),
            Err(e) => {
                return Err(InterchangeError::xml(format!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }
}

/// Write an XML declaration and an empty `sbml` root element declaring
/// the namespaces of `sbml`.
pub fn write_root(sbml: &SbmlNamespaces) -> Result<Vec<u8>, InterchangeError> {
    let core = sbml
        .sbml_uri()
        .ok_or_else(|| InterchangeError::Unsupported(format!("SBML {}", sbml.key())))?;
    let extras = sbml.extra_namespaces();

    let mut root = BytesStart::new(ROOT_ELEMENT);
    root.push_attribute(("xmlns", core));
    for (prefix, uri) in extras.iter() {
        if prefix.is_empty() {
            return Err(InterchangeError::invalid_namespace(format!(
                "default namespace is bound to SBML core, cannot redeclare as {uri}"
            )));
        }
        let attr = format!("xmlns:{prefix}");
        root.push_attribute((attr.as_str(), uri));
    }
    let level = sbml.level().to_string();
    let version = sbml.version().to_string();
    root.push_attribute(("level", level.as_str()));
    root.push_attribute(("version", version.as_str()));

    let mut buffer = Cursor::new(Vec::new());
    let mut writer = Writer::new_with_indent(&mut buffer, b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| InterchangeError::xml(format!("Write error: {e}")))?;
    writer
        .write_event(Event::Empty(root))
        .map_err(|e| InterchangeError::xml(format!("Write error: {e}")))?;

    let mut output = buffer.into_inner();
    output.push(b'\n');
    Ok(output)
}

/// Attributes captured from the root start tag.
#[derive(Debug, Default)]
struct RootHeader {
    /// Prefix of the root element's own name (`""` when unprefixed).
    element_prefix: String,
    level: Option<u32>,
    version: Option<u32>,
    declared: XmlNamespaces,
}

impl RootHeader {
    fn from_start(e: &BytesStart<'_>) -> Result<Self, InterchangeError> {
        let name_bytes = e.name();
        let tag_name = std::str::from_utf8(name_bytes.as_ref())
            .map_err(|e| InterchangeError::xml(format!("Invalid tag name: {e}")))?;
        let (element_prefix, local) = tag_name.split_once(':').unwrap_or(("", tag_name));
        if local != ROOT_ELEMENT {
            return Err(InterchangeError::invalid_element(format!(
                "expected <{ROOT_ELEMENT}> root, found <{tag_name}>"
            )));
        }

        let mut header = Self {
            element_prefix: element_prefix.to_string(),
            ..Self::default()
        };

        for attr_result in e.attributes() {
            let attr = attr_result
                .map_err(|e| InterchangeError::xml(format!("Attribute error: {e}")))?;
            let key = std::str::from_utf8(attr.key.as_ref())
                .map_err(|e| InterchangeError::xml(format!("Attribute key error: {e}")))?;
            let value = attr
                .unescape_value()
                .map_err(|e| InterchangeError::xml(format!("Attribute value error: {e}")))?;

            match key {
                "xmlns" => header.declared.add(&*value, ""),
                "level" => header.level = Some(parse_number(key, &value)?),
                "version" => header.version = Some(parse_number(key, &value)?),
                _ => {
                    if let Some(prefix) = key.strip_prefix("xmlns:") {
                        header.declared.add(&*value, prefix);
                    }
                }
            }
        }

        Ok(header)
    }

    fn into_namespaces(self) -> Result<SbmlNamespaces, InterchangeError> {
        let level = self
            .level
            .ok_or_else(|| InterchangeError::missing_attribute("level"))?;
        let version = self
            .version
            .ok_or_else(|| InterchangeError::missing_attribute("version"))?;
        let key = SbmlVersion::new(level, version);
        let expected = key
            .namespace_uri()
            .ok_or_else(|| InterchangeError::Unsupported(format!("SBML {key}")))?;

        let element_ns = self
            .declared
            .uri_for_prefix(&self.element_prefix)
            .ok_or_else(|| match self.element_prefix.as_str() {
                "" => InterchangeError::missing_attribute("xmlns"),
                prefix => InterchangeError::missing_attribute(format!("xmlns:{prefix}")),
            })?;
        if element_ns != expected {
            return Err(InterchangeError::invalid_namespace(format!(
                "{element_ns} does not match SBML {key} ({expected})"
            )));
        }

        let mut sbml = SbmlNamespaces::for_version(key);
        for (prefix, uri) in self.declared.iter() {
            if prefix != self.element_prefix {
                sbml.add_namespace(uri, prefix);
            }
        }

        debug!(%key, extra = sbml.namespaces().len() - 1, "read SBML root namespaces");
        Ok(sbml)
    }
}

fn parse_number(name: &str, value: &str) -> Result<u32, InterchangeError> {
    value.trim().parse().map_err(|_| {
        InterchangeError::invalid_attribute(format!("{name}=\"{value}\" is not an unsigned integer"))
    })
}
