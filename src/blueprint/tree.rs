use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::{
    blueprint::element::FlatElement,
    blueprint::value::PropertyValue,
    foundation::error::{BlueprintError, BlueprintResult},
};

/// Nested render-tree node produced from a flat batch.
///
/// Props still hold unresolved [`PropertyValue`]s; resolution happens per frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementObject {
    /// Component name.
    pub name: String,
    /// Props as parsed.
    pub props: BTreeMap<String, PropertyValue>,
    /// Structural children in input order, followed by own text (if any).
    pub children: Vec<Child>,
}

/// A child slot of an [`ElementObject`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Child {
    /// Nested element.
    Element(ElementObject),
    /// Text content.
    Text(String),
}

impl ElementObject {
    /// Iterate over nested element children, skipping text.
    pub fn element_children(&self) -> impl Iterator<Item = &ElementObject> {
        self.children.iter().filter_map(|c| match c {
            Child::Element(e) => Some(e),
            Child::Text(_) => None,
        })
    }

    /// Return the trailing text child, if any.
    pub fn text(&self) -> Option<&str> {
        match self.children.last() {
            Some(Child::Text(t)) => Some(t),
            _ => None,
        }
    }
}

/// Assemble a flat batch (synthetic root included) into one tree.
///
/// Children keep the order in which they appear in `elements`. Own text always comes after
/// structural children. Each id is built once: later elements reusing an id are dropped with a
/// warning, except those reusing the root's id, which render as leaf children of the root.
#[tracing::instrument(skip(elements), fields(count = elements.len()))]
pub fn flat_to_nested(elements: &[FlatElement]) -> BlueprintResult<ElementObject> {
    let root = elements
        .iter()
        .position(FlatElement::is_root_candidate)
        .ok_or_else(|| BlueprintError::conversion("no root found"))?;
    let root_id = elements[root].id.as_str();

    let mut by_id: HashMap<&str, usize> = HashMap::with_capacity(elements.len());
    let mut children_of: HashMap<&str, Vec<Slot>> = HashMap::new();
    by_id.insert(root_id, root);

    for (i, e) in elements.iter().enumerate() {
        if i == root {
            continue;
        }
        if e.id == root_id {
            tracing::warn!(index = i, name = %e.name, "element reuses the root id; kept as a leaf");
            children_of.entry(root_id).or_default().push(Slot::Leaf(i));
            continue;
        }
        if let Some(first) = by_id.get(e.id.as_str()) {
            tracing::warn!(
                id = %e.id,
                first = *first,
                dropped = i,
                "duplicate element id; dropped"
            );
            continue;
        }
        by_id.insert(e.id.as_str(), i);
        if let Some(parent) = e.parent_id.as_deref() {
            children_of.entry(parent).or_default().push(Slot::Node(i));
        }
    }

    for parent in children_of.keys().filter(|p| !by_id.contains_key(*p)) {
        tracing::debug!(parent = %parent, "parent not in batch; children unreachable");
    }

    Ok(build_node(elements, &children_of, Slot::Node(root)))
}

/// Position of an element in the batch and whether its own children are followed.
#[derive(Clone, Copy)]
enum Slot {
    Node(usize),
    Leaf(usize),
}

// Every kept id has one index and one parent edge, and nothing points back at the root, so the
// reachable graph is a tree and recursion terminates.
fn build_node(
    elements: &[FlatElement],
    children_of: &HashMap<&str, Vec<Slot>>,
    slot: Slot,
) -> ElementObject {
    let (idx, follow) = match slot {
        Slot::Node(i) => (i, true),
        Slot::Leaf(i) => (i, false),
    };
    let e = &elements[idx];

    let mut children: Vec<Child> = match children_of.get(e.id.as_str()) {
        Some(slots) if follow => slots
            .iter()
            .map(|s| Child::Element(build_node(elements, children_of, *s)))
            .collect(),
        _ => Vec::new(),
    };
    if let Some(text) = &e.text {
        children.push(Child::Text(text.clone()));
    }

    ElementObject {
        name: e.name.clone(),
        props: e.props.clone(),
        children,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blueprint/tree.rs"]
mod tests;
