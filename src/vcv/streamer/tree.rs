use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};

use super::{StreamError, VcvStreamer};
use crate::vcv::element::Element;

/// Build a childless element from a start or empty tag
pub(super) fn element_from_start(start: &BytesStart) -> Result<Element, StreamError> {
    let mut element = Element::new(std::str::from_utf8(start.name().as_ref())?);
    for attr in start.attributes() {
        let attr = attr.map_err(|e| StreamError::XmlError(quick_xml::Error::from(e)))?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.unescape_value()?.into_owned();
        element.push_attribute(key, value);
    }
    Ok(element)
}

fn append_text(stack: &mut [Element], text: &str) {
    if text.trim().is_empty() {
        return;
    }
    if let Some(current) = stack.last_mut() {
        current.append_text(text);
    }
}

impl<R: BufRead> VcvStreamer<R> {
    /// Read events up to the end tag matching `root`, attaching everything
    /// in between as descendants.
    pub(super) fn read_subtree(&mut self, root: Element) -> Result<Element, StreamError> {
        let mut stack = vec![root];
        let mut buf = Vec::new();

        loop {
            match self.reader.read_event_into(&mut buf)? {
                Event::Start(e) => stack.push(element_from_start(&e)?),
                Event::Empty(e) => {
                    let child = element_from_start(&e)?;
                    if let Some(parent) = stack.last_mut() {
                        parent.push_child(child);
                    }
                }
                Event::Text(t) => {
                    let text = t.unescape()?;
                    append_text(&mut stack, &text);
                }
                Event::CData(c) => {
                    let text = std::str::from_utf8(&c)?;
                    append_text(&mut stack, text);
                }
                Event::End(_) => {
                    let finished = stack.pop().ok_or_else(|| {
                        StreamError::InvalidStructure("unbalanced end tag".to_string())
                    })?;
                    match stack.last_mut() {
                        Some(parent) => parent.push_child(finished),
                        None => return Ok(finished),
                    }
                }
                Event::Eof => {
                    let name = stack
                        .first()
                        .map(|e| e.tag_name().to_string())
                        .unwrap_or_default();
                    return Err(StreamError::InvalidStructure(format!(
                        "document ended inside {} element",
                        name
                    )));
                }
                _ => {}
            }
            buf.clear();
        }
    }
}
