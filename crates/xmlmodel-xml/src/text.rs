//! Conversion between element trees and XML text.
//!
//! [`render`] writes an [`Element`] with quick-xml's writer, optionally
//! prefixed by the fixed declaration [`XML_DECLARATION`] and optionally
//! indented. [`parse`] reads quick-xml events into an [`Element`] with an
//! explicit stack, so arbitrarily deep documents never recurse.

use std::io;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::element::Element;
use crate::error::{ParseError, XmlError};

/// The declaration written before the root element.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" ?>"#;

/// Render `element` as XML text.
///
/// With `indent = Some(n)` every nesting level is indented by `n` spaces, a
/// newline follows the declaration and the output ends with a newline.
/// Without indentation the output is compact. Elements without text and
/// children are written self-closing. The body of an element holding both
/// text and children is never indented.
///
/// # Errors
///
/// Returns `XmlError::Io` if the writer fails, which does not happen for
/// in-memory output.
pub fn render(
    element: &Element,
    include_declaration: bool,
    indent: Option<usize>,
) -> Result<String, XmlError> {
    let mut writer = match indent {
        Some(width) => Writer::new_with_indent(Vec::with_capacity(256), b' ', width),
        None => Writer::new(Vec::with_capacity(256)),
    };
    write_element(&mut writer, element)?;
    let body = String::from_utf8(writer.into_inner())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut out = String::with_capacity(body.len() + XML_DECLARATION.len() + 2);
    if include_declaration {
        out.push_str(XML_DECLARATION);
        if indent.is_some() {
            out.push('\n');
        }
    }
    out.push_str(&body);
    if indent.is_some() {
        out.push('\n');
    }
    Ok(out)
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> io::Result<()> {
    let mut start = BytesStart::new(element.tag());
    for (name, value) in element.attributes() {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.is_empty() {
        return writer.write_event(Event::Empty(start));
    }

    writer.write_event(Event::Start(start))?;
    match element.text().filter(|t| !t.is_empty()) {
        // Indentation would leak into the text, so text and children go out as one compact run.
        Some(text) if !element.children().is_empty() => {
            let mut inline = Writer::new(Vec::with_capacity(128));
            write_text(&mut inline, text)?;
            for child in element.children() {
                write_element(&mut inline, child)?;
            }
            let markup = String::from_utf8(inline.into_inner())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writer.write_event(Event::Text(BytesText::from_escaped(markup)))?;
        }
        Some(text) => write_text(writer, text)?,
        None => {
            for child in element.children() {
                write_element(writer, child)?;
            }
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.tag())))
}

fn write_text(writer: &mut Writer<Vec<u8>>, text: &str) -> io::Result<()> {
    writer.write_event(Event::Text(BytesText::from_escaped(
        quick_xml::escape::partial_escape(text),
    )))
}

/// Parse XML text into an element tree.
///
/// Declarations, comments, processing instructions and doctypes are skipped.
/// CDATA and resolved references are appended to the element text. When an
/// element has children, whitespace-only text between them is dropped.
///
/// # Errors
///
/// Returns `ParseError` for empty input, a missing root, unclosed or
/// mismatched tags, malformed attributes or references, and content after
/// the root element.
pub fn parse(xml: &str) -> Result<Element, ParseError> {
    if xml.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut reader = Reader::from_str(xml);
    reader.config_mut().check_end_names = false;

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if root.is_some() {
                    return Err(ParseError::TrailingContent);
                }
                let mut element = start_element(&e)?;
                element.set_text(Some(String::new()));
                stack.push(element);
            }
            Event::Empty(e) => {
                let element = start_element(&e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(e) => {
                let name = e.name();
                let found = utf8(name.as_ref())?;
                let Some(mut element) = stack.pop() else {
                    return Err(ParseError::UnexpectedEndTag {
                        found: found.to_owned(),
                    });
                };
                if element.tag() != found {
                    return Err(ParseError::MismatchedEndTag {
                        expected: element.tag().to_owned(),
                        found: found.to_owned(),
                    });
                }
                drop_ignorable_whitespace(&mut element);
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| ParseError::Encoding(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)?;
                push_text(&mut stack, &unescaped)?;
            }
            Event::CData(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| ParseError::Encoding(err.to_string()))?;
                push_text(&mut stack, &decoded)?;
            }
            Event::GeneralRef(e) => {
                let resolved = match e.resolve_char_ref()? {
                    Some(ch) => ch.to_string(),
                    None => {
                        let name = e
                            .decode()
                            .map_err(|err| ParseError::Encoding(err.to_string()))?;
                        quick_xml::escape::resolve_predefined_entity(&name)
                            .ok_or_else(|| ParseError::UnknownEntity(name.into_owned()))?
                            .to_owned()
                    }
                };
                push_text(&mut stack, &resolved)?;
            }
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::Comment(_) | Event::DocType(_) => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ParseError::UnexpectedEof {
            open: open.tag().to_owned(),
        });
    }
    root.ok_or(ParseError::NoRootElement)
}

fn start_element(start: &BytesStart<'_>) -> Result<Element, ParseError> {
    let mut element = Element::new(utf8(start.name().as_ref())?);
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let name = utf8(attr.key.as_ref())?;
        let raw = utf8(&attr.value)?;
        let value = quick_xml::escape::unescape(raw)?;
        element.set_attribute(name, value.into_owned());
    }
    Ok(element)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), ParseError> {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(ParseError::TrailingContent);
    }
    *root = Some(element);
    Ok(())
}

fn push_text(stack: &mut [Element], text: &str) -> Result<(), ParseError> {
    match stack.last_mut() {
        Some(element) => {
            element.append_text(text);
            Ok(())
        }
        None if text.trim().is_empty() => Ok(()),
        None => Err(ParseError::TrailingContent),
    }
}

fn drop_ignorable_whitespace(element: &mut Element) {
    if element.children().is_empty() {
        return;
    }
    if let Some(text) = element.text_mut() {
        if text.trim().is_empty() {
            text.clear();
        }
    }
}

fn utf8(bytes: &[u8]) -> Result<&str, ParseError> {
    std::str::from_utf8(bytes).map_err(|e| ParseError::Encoding(e.to_string()))
}
