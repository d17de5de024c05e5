//! `colors.xml`

use std::collections::BTreeMap;

use super::xml::{
    RawNode, ResourceWriter, attributes, node_element, node_text, read_resources,
    take_attribute,
};
use crate::{Error, Result};

const DOCUMENT: &str = "colors";

/// One `<color>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorItem {
    pub name: String,
    pub value: String,
}

/// The content of a `colors.xml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorsDocument {
    pub colors: Vec<ColorItem>,
    root_attributes: Vec<(String, String)>,
    passthrough: Vec<RawNode>,
}

impl ColorsDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// No colors and no other content.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.passthrough.is_empty()
    }

    pub fn get_color(&self, name: &str) -> Option<&str> {
        self.colors
            .iter()
            .find(|color| color.name == name)
            .map(|color| color.value.as_str())
    }

    /// Overwrite `name` or append it.
    pub fn set_color(mut self, name: &str, value: &str) -> Self {
        match self.colors.iter_mut().find(|color| color.name == name) {
            Some(color) => color.value = value.to_string(),
            None => self.colors.push(ColorItem {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
        self
    }

    pub fn remove_color(mut self, name: &str) -> Self {
        self.colors.retain(|color| color.name != name);
        self
    }

    pub fn as_map(&self) -> BTreeMap<String, String> {
        self.colors
            .iter()
            .map(|color| (color.name.clone(), color.value.clone()))
            .collect()
    }

    /// Parse `colors.xml` content. Empty input yields an empty document.
    ///
    /// Top-level nodes other than `<color>` are kept verbatim.
    pub fn parse(xml: &str) -> Result<Self> {
        let tree = read_resources(DOCUMENT, xml)?;
        let mut doc = Self {
            root_attributes: tree.root_attributes,
            ..Self::default()
        };

        for node in tree.nodes {
            match node_element(&node) {
                Some(e) if e.name().as_ref() == b"color" => {
                    let mut attrs = attributes(DOCUMENT, e)?;
                    let name = take_attribute(&mut attrs, "name").ok_or(
                        Error::MissingAttribute {
                            document: DOCUMENT,
                            element: "color",
                            attribute: "name",
                        },
                    )?;
                    let value = node_text(DOCUMENT, &node)?;
                    doc.colors.push(ColorItem { name, value });
                }
                _ => doc.passthrough.push(RawNode {
                    anchor: doc.colors.len(),
                    events: node,
                }),
            }
        }

        Ok(doc)
    }

    /// Serialize to `colors.xml` content.
    pub fn to_xml(&self) -> Result<String> {
        let root: Vec<(&str, &str)> = self
            .root_attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        let mut writer = ResourceWriter::new(DOCUMENT, &root)?;
        writer.interleaved(&self.colors, &self.passthrough, |writer, color| {
            writer.text_element("color", &[("name", color.name.as_str())], &color.value)
        })?;
        writer.finish()
    }
}
