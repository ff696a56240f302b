use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::error::ParseCause;

const ANIMATE_SIGIL: &str = "@animate";

/// A plain, non-animated property value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Boolean literal (`true` / `false`).
    Bool(bool),
    /// Numeric literal.
    Number(f64),
    /// Anything else, kept verbatim.
    String(String),
    /// Bracketed array `[a,b,c]`.
    List(Vec<Scalar>),
    /// Braced object `{k:v,k:v}`.
    Map(BTreeMap<String, Scalar>),
}

impl Scalar {
    /// Return the number when this is [`Scalar::Number`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Return the string slice when this is [`Scalar::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Return the boolean when this is [`Scalar::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

/// A property value as written in an element description.
///
/// The variant is decided once, at parse time. Resolution never re-infers it from shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    /// Time-invariant value.
    Constant(Scalar),
    /// Keyframed value on the global timeline.
    Animated {
        /// Keyframe instants in seconds on the global timeline (`len >= 2`).
        timestamps: Vec<f64>,
        /// Keyframe values, same length as `timestamps`.
        values: Vec<Scalar>,
    },
}

impl PropertyValue {
    /// Build a [`PropertyValue::Constant`] from anything convertible into a [`Scalar`].
    pub fn constant(v: impl Into<Scalar>) -> Self {
        Self::Constant(v.into())
    }

    /// Return `true` for [`PropertyValue::Animated`].
    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Animated { .. })
    }

    /// Return the constant scalar, if any.
    pub fn as_constant(&self) -> Option<&Scalar> {
        match self {
            Self::Constant(v) => Some(v),
            Self::Animated { .. } => None,
        }
    }
}

/// Parse the raw value of `key:value` into a typed [`PropertyValue`].
///
/// Detection order: animation sigil, bracketed array, braced object, boolean, number, string.
/// `key` is only used for diagnostics.
pub fn parse_property_value(key: &str, raw: &str) -> Result<PropertyValue, ParseCause> {
    let raw = raw.trim();

    if raw.starts_with(ANIMATE_SIGIL) {
        return parse_animation(key, raw);
    }

    if let Some(inner) = raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        return Ok(PropertyValue::Constant(Scalar::List(parse_list_items(inner))));
    }

    if let Some(inner) = raw.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        return Ok(PropertyValue::Constant(Scalar::Map(parse_object_pairs(
            key, inner,
        ))));
    }

    Ok(PropertyValue::Constant(parse_simple_value(raw)))
}

/// Parse a value that may only be a boolean, a number, or a string.
pub(crate) fn parse_simple_value(raw: &str) -> Scalar {
    let raw = raw.trim();
    match raw {
        "true" => return Scalar::Bool(true),
        "false" => return Scalar::Bool(false),
        _ => {}
    }
    if is_numeric_literal(raw)
        && let Ok(v) = raw.parse::<f64>()
    {
        return Scalar::Number(v);
    }
    Scalar::String(raw.to_owned())
}

/// Return `true` when `s` fully matches `-?\d+(\.\d+)?`.
pub(crate) fn is_numeric_literal(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    let (int, frac) = match s.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (s, None),
    };
    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    all_digits(int) && frac.is_none_or(all_digits)
}

fn parse_animation(key: &str, raw: &str) -> Result<PropertyValue, ParseCause> {
    let malformed = || ParseCause::MalformedAnimation {
        key: key.to_owned(),
    };

    let body = raw[ANIMATE_SIGIL.len()..].trim_start();
    let body = body.strip_prefix('[').ok_or_else(malformed)?;
    let (times_src, rest) = body.split_once(']').ok_or_else(malformed)?;
    let rest = rest.trim_start().strip_prefix(':').ok_or_else(malformed)?;
    let values_src = rest
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(malformed)?;

    let mut timestamps = Vec::new();
    for token in split_items(times_src) {
        let t = token
            .parse::<f64>()
            .ok()
            .filter(|t| t.is_finite())
            .ok_or_else(|| ParseCause::BadTimestamp {
                key: key.to_owned(),
                token: token.to_owned(),
            })?;
        timestamps.push(t);
    }

    let values: Vec<Scalar> = split_items(values_src).map(parse_simple_value).collect();

    if timestamps.len() != values.len() {
        return Err(ParseCause::KeyframeCountMismatch {
            key: key.to_owned(),
            timestamps: timestamps.len(),
            values: values.len(),
        });
    }
    if timestamps.len() < 2 {
        return Err(ParseCause::TooFewKeyframes {
            key: key.to_owned(),
            count: timestamps.len(),
        });
    }

    Ok(PropertyValue::Animated { timestamps, values })
}

fn split_items(inner: &str) -> impl Iterator<Item = &str> {
    let inner = inner.trim();
    // `"".split(',')` yields one empty item; an empty list has none.
    let src = if inner.is_empty() { None } else { Some(inner) };
    src.into_iter().flat_map(|s| s.split(',')).map(str::trim)
}

fn parse_list_items(inner: &str) -> Vec<Scalar> {
    split_items(inner).map(parse_simple_value).collect()
}

fn parse_object_pairs(key: &str, inner: &str) -> BTreeMap<String, Scalar> {
    let mut out = BTreeMap::new();
    for pair in split_items(inner) {
        let Some((k, v)) = pair.split_once(':') else {
            tracing::warn!(key = %key, pair = %pair, "skipping object entry without ':'");
            continue;
        };
        let k = k.trim();
        if k.is_empty() {
            tracing::warn!(key = %key, pair = %pair, "skipping object entry with empty key");
            continue;
        }
        out.insert(k.to_owned(), parse_simple_value(v));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/blueprint/value.rs"]
mod tests;
