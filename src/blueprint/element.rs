use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    blueprint::value::{PropertyValue, parse_property_value},
    foundation::core::{NULL_TOKEN, ROOT_ID, SYNTHETIC_ROOT_NAME},
    foundation::error::{BlueprintError, BlueprintResult, ParseCause},
};

const KEY_ID: &str = "id";
const KEY_PARENT: &str = "parent";
const KEY_TEXT: &str = "text";

/// One parsed element description, still referencing its parent by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlatElement {
    /// Element id, unique within a batch.
    pub id: String,
    /// Component name (first `;` segment).
    pub name: String,
    /// Parent id. `None` only for the synthetic root.
    pub parent_id: Option<String>,
    /// Non-reserved properties.
    pub props: BTreeMap<String, PropertyValue>,
    /// Own text content, rendered after structural children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl FlatElement {
    /// Build the synthetic root element prepended to every batch.
    pub fn synthetic_root() -> Self {
        Self {
            id: ROOT_ID.to_owned(),
            name: SYNTHETIC_ROOT_NAME.to_owned(),
            parent_id: None,
            props: BTreeMap::new(),
            text: None,
        }
    }

    /// Return `true` when this element can act as a tree root.
    pub fn is_root_candidate(&self) -> bool {
        self.id == ROOT_ID || self.parent_id.as_deref().is_none_or(|p| p == NULL_TOKEN)
    }
}

/// A parsed batch with the synthetic root already in front.
#[derive(Clone, Debug, PartialEq)]
pub struct BlueprintBatch {
    /// Flat elements: the synthetic root followed by caller elements in input order.
    pub elements: Vec<FlatElement>,
    /// `true` when a caller element also declared `id:root`.
    ///
    /// The synthetic root is still injected, so the tree ends up with two roots superimposed.
    pub caller_declared_root: bool,
}

/// Parse one `"Name;key:value;..."` description.
///
/// `index` is the element's position in the caller's batch and only feeds diagnostics.
pub fn parse_element(index: usize, src: &str) -> BlueprintResult<FlatElement> {
    let fail = |cause| BlueprintError::parse(index, src, cause);

    let mut segments = src.split(';');
    let name = segments.next().unwrap_or_default().trim();
    if name.is_empty() {
        return Err(fail(ParseCause::MissingName));
    }

    let mut id = None;
    let mut parent_id = None;
    let mut text = None;
    let mut props = BTreeMap::new();

    for segment in segments {
        if segment.trim().is_empty() {
            continue;
        }
        let Some((key, value)) = segment.split_once(':') else {
            tracing::warn!(
                index,
                element = %name,
                segment = %segment,
                "skipping segment without ':'"
            );
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            tracing::warn!(
                index,
                element = %name,
                segment = %segment,
                "skipping segment with empty key"
            );
            continue;
        }
        let value = value.trim();

        match key {
            KEY_ID => id = Some(value.to_owned()),
            KEY_PARENT => {
                parent_id = Some(match value {
                    NULL_TOKEN | ROOT_ID => ROOT_ID.to_owned(),
                    other => other.to_owned(),
                });
            }
            KEY_TEXT => {
                text = Some(value.to_owned());
                props.insert(KEY_TEXT.to_owned(), PropertyValue::constant(value));
            }
            _ => {
                let parsed = parse_property_value(key, value).map_err(fail)?;
                props.insert(key.to_owned(), parsed);
            }
        }
    }

    let id = id.ok_or_else(|| {
        fail(ParseCause::MissingId {
            name: name.to_owned(),
        })
    })?;

    Ok(FlatElement {
        id,
        name: name.to_owned(),
        parent_id: Some(parent_id.unwrap_or_else(|| ROOT_ID.to_owned())),
        props,
        text,
    })
}

/// Parse a batch of element descriptions, preserving input order.
///
/// The first hard failure aborts the batch.
pub fn parse_elements<S: AsRef<str>>(srcs: &[S]) -> BlueprintResult<Vec<FlatElement>> {
    srcs.iter()
        .enumerate()
        .map(|(i, s)| parse_element(i, s.as_ref()))
        .collect()
}

/// Prepend the synthetic `AbsoluteFill` root to a parsed batch.
///
/// Injection is unconditional. A caller element that already uses `id:root` is flagged on the
/// returned batch and logged.
pub fn with_synthetic_root(elements: Vec<FlatElement>) -> BlueprintBatch {
    let caller_declared_root = elements.iter().any(|e| e.id == ROOT_ID);
    if caller_declared_root {
        tracing::warn!("caller batch declares id 'root'; synthetic root injected anyway");
    }

    let mut out = Vec::with_capacity(elements.len() + 1);
    out.push(FlatElement::synthetic_root());
    out.extend(elements);
    BlueprintBatch {
        elements: out,
        caller_declared_root,
    }
}

/// Parse a clip's element strings and inject the synthetic root.
#[tracing::instrument(skip(srcs), fields(count = srcs.len()))]
pub fn parse_blueprint<S: AsRef<str>>(srcs: &[S]) -> BlueprintResult<BlueprintBatch> {
    Ok(with_synthetic_root(parse_elements(srcs)?))
}

#[cfg(test)]
#[path = "../../tests/unit/blueprint/element.rs"]
mod tests;
