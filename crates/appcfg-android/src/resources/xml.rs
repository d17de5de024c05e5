//! Shared quick-xml plumbing for resource documents

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::{Error, Result};

pub(crate) const RESOURCES: &str = "resources";

/// Namespace declaration for `tools:` attributes such as `tools:targetApi`.
pub(crate) const TOOLS_NAMESPACE: (&str, &str) = ("xmlns:tools", "http://schemas.android.com/tools");

/// Top-level content a document does not model, kept verbatim.
///
/// Comments, other resource types (`<dimen>`, `<string>`, ...) and anything
/// else directly under `<resources>` land here and are written back in
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNode {
    /// Number of modeled entries before this node in the document
    pub(crate) anchor: usize,
    pub(crate) events: Vec<Event<'static>>,
}

/// A `<resources>` file split into its root attributes and top-level nodes.
///
/// Each node is the complete event sequence of one child: a single event
/// for comments and empty elements, `Start .. End` for everything else.
#[derive(Debug, Default)]
pub(crate) struct ResourceTree {
    pub(crate) root_attributes: Vec<(String, String)>,
    pub(crate) nodes: Vec<Vec<Event<'static>>>,
}

/// Read a resource file. Content outside the root element is skipped; the
/// XML declaration is regenerated on write.
pub(crate) fn read_resources(document: &'static str, xml: &str) -> Result<ResourceTree> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut tree = ResourceTree::default();
    let mut depth = 0usize;
    let mut current: Vec<Event<'static>> = Vec::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| Error::parse(document, e))?
            .into_owned();
        match event {
            Event::Eof => break,
            Event::Start(ref root) if depth == 0 => {
                tree.root_attributes = attributes(document, root)?;
                depth = 1;
            }
            Event::Empty(ref root) if depth == 0 => {
                tree.root_attributes = attributes(document, root)?;
            }
            _ if depth == 0 => {}
            Event::End(_) if depth == 1 => depth = 0,
            Event::Start(_) => {
                depth += 1;
                current.push(event);
            }
            Event::End(_) => {
                depth -= 1;
                current.push(event);
                if depth == 1 {
                    tree.nodes.push(std::mem::take(&mut current));
                }
            }
            other if depth == 1 => tree.nodes.push(vec![other]),
            other => current.push(other),
        }
    }

    if depth != 0 {
        return Err(Error::parse(document, "unclosed <resources> element"));
    }
    Ok(tree)
}

/// The element that opens a node, if it is one.
pub(crate) fn node_element<'a>(node: &'a [Event<'static>]) -> Option<&'a BytesStart<'static>> {
    match node.first() {
        Some(Event::Start(e)) | Some(Event::Empty(e)) => Some(e),
        _ => None,
    }
}

/// Text content of a `Start .. End` element node, ignoring nested markup.
pub(crate) fn node_text(document: &'static str, node: &[Event<'static>]) -> Result<String> {
    let mut text = String::new();
    for event in node {
        match event {
            Event::Text(t) => text.push_str(&t.unescape().map_err(|e| Error::parse(document, e))?),
            Event::CData(c) => text.push_str(&String::from_utf8_lossy(c)),
            _ => {}
        }
    }
    Ok(text)
}

/// Attributes of an element as owned `(key, value)` pairs, in document order.
pub(crate) fn attributes(
    document: &'static str,
    element: &BytesStart<'_>,
) -> Result<Vec<(String, String)>> {
    let mut out = Vec::new();
    for attr in element.attributes() {
        let attr = attr.map_err(|e| Error::parse(document, e))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::parse(document, e))?
            .into_owned();
        out.push((key, value));
    }
    Ok(out)
}

/// Remove and return the attribute named `key`.
pub(crate) fn take_attribute(attrs: &mut Vec<(String, String)>, key: &str) -> Option<String> {
    let idx = attrs.iter().position(|(k, _)| k == key)?;
    Some(attrs.remove(idx).1)
}

/// Indenting writer that starts with an XML declaration and the root element.
pub(crate) struct ResourceWriter {
    document: &'static str,
    writer: Writer<Vec<u8>>,
}

impl ResourceWriter {
    pub(crate) fn new(document: &'static str, root_attrs: &[(&str, &str)]) -> Result<Self> {
        let mut this = Self {
            document,
            writer: Writer::new_with_indent(Vec::new(), b' ', 4),
        };
        this.event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        this.start(RESOURCES, root_attrs)?;
        Ok(this)
    }

    pub(crate) fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| Error::write(self.document, e))
    }

    pub(crate) fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut start = BytesStart::new(name);
        for attr in attrs {
            start.push_attribute(*attr);
        }
        self.event(Event::Start(start))
    }

    pub(crate) fn end(&mut self, name: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    /// `<name attrs...>text</name>` on a single line, `<name attrs.../>`
    /// when `text` is empty.
    pub(crate) fn text_element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
        if text.is_empty() {
            let mut empty = BytesStart::new(name);
            for attr in attrs {
                empty.push_attribute(*attr);
            }
            return self.event(Event::Empty(empty));
        }
        self.start(name, attrs)?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    pub(crate) fn raw(&mut self, node: &RawNode) -> Result<()> {
        for event in &node.events {
            self.event(event.clone())?;
        }
        Ok(())
    }

    /// Write `entries` in order, with each raw node placed before the entry
    /// it was anchored to and trailing nodes after the last entry.
    pub(crate) fn interleaved<T>(
        &mut self,
        entries: &[T],
        raw: &[RawNode],
        mut write_entry: impl FnMut(&mut Self, &T) -> Result<()>,
    ) -> Result<()> {
        let mut pending = raw.iter().peekable();
        for (idx, entry) in entries.iter().enumerate() {
            while let Some(node) = pending.next_if(|node| node.anchor <= idx) {
                self.raw(node)?;
            }
            write_entry(self, entry)?;
        }
        for node in pending {
            self.raw(node)?;
        }
        Ok(())
    }

    pub(crate) fn finish(mut self) -> Result<String> {
        self.end(RESOURCES)?;
        let mut xml =
            String::from_utf8(self.writer.into_inner()).map_err(|e| Error::write(self.document, e))?;
        xml.push('\n');
        Ok(xml)
    }
}
