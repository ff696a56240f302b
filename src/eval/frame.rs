use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    animation::interp::{Interpolate, KeyframeInterpolator},
    animation::resolve::{is_source_relative, resolve_property},
    blueprint::cache::BlueprintCache,
    blueprint::tree::{Child, ElementObject},
    blueprint::value::{PropertyValue, Scalar},
    composition::model::Clip,
    foundation::error::BlueprintResult,
    schema::registry::{ComponentKind, PropRoute, component_schema},
};

/// A prop after per-frame resolution.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResolvedProp {
    /// Value at the sampled instant.
    Value(Scalar),
    /// Media-source offset passed through untouched.
    SourceRelative(PropertyValue),
}

impl ResolvedProp {
    /// Return the resolved scalar, if this prop was resolved.
    pub fn as_value(&self) -> Option<&Scalar> {
        match self {
            Self::Value(v) => Some(v),
            Self::SourceRelative(_) => None,
        }
    }
}

/// One element ready for the renderer: props split by the component schema.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedElement {
    /// Component name.
    pub name: String,
    /// HTML tag or component.
    pub kind: ComponentKind,
    /// Props forwarded to the component.
    pub component_props: BTreeMap<String, ResolvedProp>,
    /// Props folded into style.
    pub style_props: BTreeMap<String, ResolvedProp>,
    /// Children in tree order.
    pub children: Vec<ResolvedChild>,
}

/// Child slot of a [`ResolvedElement`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResolvedChild {
    /// Nested element.
    Element(ResolvedElement),
    /// Text content.
    Text(String),
}

/// Resolve every prop of `node` and its descendants at the instant `interp` samples.
pub fn resolve_element<I>(node: &ElementObject, interp: &I) -> ResolvedElement
where
    I: Interpolate + ?Sized,
{
    let schema = component_schema(&node.name);
    let mut component_props = BTreeMap::new();
    let mut style_props = BTreeMap::new();

    for (key, prop) in &node.props {
        let target = match schema.route(key) {
            PropRoute::Component => &mut component_props,
            PropRoute::Style => &mut style_props,
            PropRoute::Dropped => continue,
        };
        let resolved = if is_source_relative(&node.name, key) {
            ResolvedProp::SourceRelative(prop.clone())
        } else {
            ResolvedProp::Value(resolve_property(prop, interp))
        };
        target.insert(key.clone(), resolved);
    }

    let children = node
        .children
        .iter()
        .map(|c| match c {
            Child::Element(e) => ResolvedChild::Element(resolve_element(e, interp)),
            Child::Text(t) => ResolvedChild::Text(t.clone()),
        })
        .collect();

    ResolvedElement {
        name: node.name.clone(),
        kind: schema.kind,
        component_props,
        style_props,
        children,
    }
}

/// Resolve a clip's tree at a global-timeline instant, reusing cached parse results.
pub fn resolve_clip_at(
    cache: &mut BlueprintCache,
    clip: &Clip,
    time_sec: f64,
) -> BlueprintResult<ResolvedElement> {
    let tree = cache.get_or_build(clip.element.as_slice())?;
    Ok(resolve_element(&tree, &KeyframeInterpolator::at_seconds(time_sec)))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/frame.rs"]
mod tests;
