use super::{Element, XmlError};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::path::Path;
use tracing::trace;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Deepest element nesting accepted by [`parse_document`]
pub const MAX_DEPTH: usize = 1024;

/// Read and parse a resource file from disk
pub fn read_document(path: &Path) -> Result<Element, XmlError> {
    let bytes = std::fs::read(path)?;
    let contents = decode(bytes)?;

    let root = parse_document(&contents)?;
    trace!("Parsed {} (root <{}>)", path.display(), root.name);
    Ok(root)
}

/// Decode file contents by byte order mark, defaulting to UTF-8
fn decode(bytes: Vec<u8>) -> Result<String, XmlError> {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return Ok(String::from_utf8(rest.to_vec())?);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes);
    }
    Ok(String::from_utf8(bytes)?)
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, XmlError> {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    Ok(String::from_utf16(&units)?)
}

/// Parse a document into its root element
pub fn parse_document(contents: &str) -> Result<Element, XmlError> {
    let mut reader = Reader::from_str(contents);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut open: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                // Metrics and drop recurse once per level
                if open.len() >= MAX_DEPTH {
                    return Err(XmlError::TooDeep(MAX_DEPTH));
                }
                let element = open_element(e, reader.buffer_position())?;
                open.push(element);
            }
            Ok(Event::Empty(ref e)) => {
                let element = open_element(e, reader.buffer_position())?;
                attach(&mut open, &mut root, element)?;
            }
            Ok(Event::End(ref e)) => {
                let element = open.pop().ok_or_else(|| XmlError::Malformed {
                    position: reader.buffer_position(),
                    message: format!(
                        "closing tag </{}> has no matching start tag",
                        String::from_utf8_lossy(e.name().as_ref())
                    ),
                })?;
                attach(&mut open, &mut root, element)?;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(XmlError::Malformed {
                    position: reader.buffer_position(),
                    message: e.to_string(),
                });
            }
            // Text, CDATA, comments, PIs, declarations and doctypes carry no structure
            Ok(_) => {}
        }
        buf.clear();
    }

    if let Some(unclosed) = open.pop() {
        return Err(XmlError::Unclosed(unclosed.name));
    }

    root.ok_or(XmlError::NoRoot)
}

fn open_element(start: &BytesStart, position: usize) -> Result<Element, XmlError> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));

    for attr in start.attributes() {
        let attr = attr.map_err(|e| XmlError::Malformed {
            position,
            message: e.to_string(),
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| XmlError::Malformed {
                position,
                message: e.to_string(),
            })?
            .into_owned();
        element.attributes.push((key, value));
    }

    Ok(element)
}

fn attach(
    open: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), XmlError> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(element);
    } else if root.is_some() {
        return Err(XmlError::MultipleRoots(element.name));
    } else {
        *root = Some(element);
    }
    Ok(())
}
