//! `styles.xml`

use std::collections::BTreeMap;

use quick_xml::events::{BytesStart, Event};

use super::xml::{
    RawNode, ResourceWriter, TOOLS_NAMESPACE, attributes, node_element, node_text,
    read_resources, take_attribute,
};
use crate::{Error, Result};

const DOCUMENT: &str = "styles";

/// Identifies a `<style>` by name and, optionally, parent theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleParent {
    pub name: &'static str,
    pub parent: Option<&'static str>,
}

impl StyleParent {
    /// The `AppTheme` style every generated Android project starts with.
    pub const fn app_theme_light_no_action_bar() -> Self {
        Self {
            name: "AppTheme",
            parent: Some("Theme.AppCompat.Light.NoActionBar"),
        }
    }

    fn matches(&self, group: &ResourceGroup) -> bool {
        group.name == self.name
            && self
                .parent
                .is_none_or(|parent| group.parent.as_deref() == Some(parent))
    }
}

/// One `<item>` of a style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceItem {
    pub name: String,
    pub value: String,
    /// Attributes other than `name`, e.g. `tools:targetApi`
    pub attributes: Vec<(String, String)>,
}

impl ResourceItem {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            attributes: Vec::new(),
        }
    }
}

/// One `<style>` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup {
    pub name: String,
    pub parent: Option<String>,
    pub items: Vec<ResourceItem>,
}

impl ResourceGroup {
    fn from_parent(parent: &StyleParent) -> Self {
        Self {
            name: parent.name.to_string(),
            parent: parent.parent.map(str::to_string),
            items: Vec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.value.as_str())
    }

    /// Overwrite the value of `name`, or append a new item.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.items.iter_mut().find(|item| item.name == name) {
            Some(item) => item.value = value.to_string(),
            None => self.items.push(ResourceItem::new(name, value)),
        }
    }

    /// Returns whether an item was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.name != name);
        self.items.len() != before
    }

    /// Items as a name → value map.
    pub fn as_map(&self) -> BTreeMap<String, String> {
        self.items
            .iter()
            .map(|item| (item.name.clone(), item.value.clone()))
            .collect()
    }
}

/// The content of a `styles.xml` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesDocument {
    pub groups: Vec<ResourceGroup>,
    root_attributes: Vec<(String, String)>,
    passthrough: Vec<RawNode>,
}

impl Default for StylesDocument {
    /// An empty document whose root declares the `tools` namespace.
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            root_attributes: vec![(TOOLS_NAMESPACE.0.to_string(), TOOLS_NAMESPACE.1.to_string())],
            passthrough: Vec::new(),
        }
    }
}

impl StylesDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// No styles and no other content.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.passthrough.is_empty()
    }

    pub fn group(&self, parent: &StyleParent) -> Option<&ResourceGroup> {
        self.groups.iter().find(|group| parent.matches(group))
    }

    /// The matching group, appended if it does not exist yet.
    pub fn group_mut(&mut self, parent: &StyleParent) -> &mut ResourceGroup {
        let idx = match self.groups.iter().position(|group| parent.matches(group)) {
            Some(idx) => idx,
            None => {
                self.groups.push(ResourceGroup::from_parent(parent));
                self.groups.len() - 1
            }
        };
        &mut self.groups[idx]
    }

    /// Set `name` to `value` in the group, creating the group if needed.
    pub fn set_styles_item(mut self, parent: &StyleParent, name: &str, value: &str) -> Self {
        self.group_mut(parent).set(name, value);
        self
    }

    /// Remove `name` from the group. A missing group is not created.
    pub fn remove_styles_item(mut self, parent: &StyleParent, name: &str) -> Self {
        if let Some(group) = self.groups.iter_mut().find(|group| parent.matches(group)) {
            group.remove(name);
        }
        self
    }

    /// The group's items as a map; empty when the group does not exist.
    pub fn group_as_map(&self, parent: &StyleParent) -> BTreeMap<String, String> {
        self.group(parent).map(ResourceGroup::as_map).unwrap_or_default()
    }

    /// Parse `styles.xml` content. Empty input yields an empty document.
    ///
    /// Top-level nodes other than `<style>` are kept verbatim, as are the
    /// attributes of the `<resources>` root.
    pub fn parse(xml: &str) -> Result<Self> {
        let tree = read_resources(DOCUMENT, xml)?;
        let mut doc = Self {
            root_attributes: tree.root_attributes,
            ..Self::default()
        };

        for node in tree.nodes {
            match node_element(&node) {
                Some(e) if e.name().as_ref() == b"style" => {
                    let mut group = parse_group(e)?;
                    group.items = parse_items(&node)?;
                    doc.groups.push(group);
                }
                _ => doc.passthrough.push(RawNode {
                    anchor: doc.groups.len(),
                    events: node,
                }),
            }
        }

        Ok(doc)
    }

    /// Serialize to `styles.xml` content.
    pub fn to_xml(&self) -> Result<String> {
        let mut root: Vec<(&str, &str)> = self
            .root_attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        if !root.iter().any(|(k, _)| *k == TOOLS_NAMESPACE.0) {
            root.push(TOOLS_NAMESPACE);
        }

        let mut writer = ResourceWriter::new(DOCUMENT, &root)?;
        writer.interleaved(&self.groups, &self.passthrough, |writer, group| {
            let mut attrs = vec![("name", group.name.as_str())];
            if let Some(parent) = &group.parent {
                attrs.push(("parent", parent.as_str()));
            }
            writer.start("style", &attrs)?;
            for item in &group.items {
                let mut attrs = vec![("name", item.name.as_str())];
                attrs.extend(item.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str())));
                writer.text_element("item", &attrs, &item.value)?;
            }
            writer.end("style")
        })?;
        writer.finish()
    }
}

/// The `<item>` children of a `<style>` node; other children are skipped.
fn parse_items(node: &[Event<'static>]) -> Result<Vec<ResourceItem>> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut open: Option<(ResourceItem, usize)> = None;

    // the first event opens the <style> itself
    for (idx, event) in node.iter().enumerate().skip(1) {
        match event {
            Event::Start(e) => {
                if depth == 0 && e.name().as_ref() == b"item" {
                    open = Some((parse_item(e)?, idx));
                }
                depth += 1;
            }
            Event::Empty(e) if depth == 0 && e.name().as_ref() == b"item" => {
                items.push(parse_item(e)?);
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    if let Some((mut item, from)) = open.take() {
                        item.value = node_text(DOCUMENT, &node[from..=idx])?;
                        items.push(item);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(items)
}

fn parse_group(element: &BytesStart<'_>) -> Result<ResourceGroup> {
    let mut attrs = attributes(DOCUMENT, element)?;
    let name = take_attribute(&mut attrs, "name").ok_or(Error::MissingAttribute {
        document: DOCUMENT,
        element: "style",
        attribute: "name",
    })?;
    Ok(ResourceGroup {
        name,
        parent: take_attribute(&mut attrs, "parent"),
        items: Vec::new(),
    })
}

fn parse_item(element: &BytesStart<'_>) -> Result<ResourceItem> {
    let mut attrs = attributes(DOCUMENT, element)?;
    let name = take_attribute(&mut attrs, "name").ok_or(Error::MissingAttribute {
        document: DOCUMENT,
        element: "item",
        attribute: "name",
    })?;
    Ok(ResourceItem {
        name,
        value: String::new(),
        attributes: attrs,
    })
}
