use smallvec::SmallVec;

use crate::{
    animation::ease::Ease,
    animation::interp::Interpolate,
    animation::template::NumericTemplate,
    blueprint::value::{PropertyValue, Scalar},
};

/// Every animated property is eased with this curve.
pub const RESOLVE_EASE: Ease = Ease::InOut;

/// (element name, prop key) pairs that hold positions inside a media file.
///
/// These are offsets relative to the source, not instants on the composition timeline, so
/// callers must pass them through unresolved.
const SOURCE_RELATIVE_PROPS: &[(&str, &str)] = &[
    ("Video", "startFrom"),
    ("Video", "endAt"),
    ("OffthreadVideo", "startFrom"),
    ("OffthreadVideo", "endAt"),
    ("Audio", "startFrom"),
    ("Audio", "endAt"),
];

/// Return `true` when `key` on `element` must skip timeline resolution.
pub fn is_source_relative(element: &str, key: &str) -> bool {
    SOURCE_RELATIVE_PROPS
        .iter()
        .any(|(e, k)| *e == element && *k == key)
}

/// Evaluate a property at the instant `interp` samples.
///
/// Constants pass through. Animated numbers, `#RRGGBB` colors and numeric-bearing strings are
/// interpolated; anything that cannot be interpolated degrades to the first keyframe value with a
/// logged warning. Never fails.
pub fn resolve_property<I>(prop: &PropertyValue, interp: &I) -> Scalar
where
    I: Interpolate + ?Sized,
{
    match prop {
        PropertyValue::Constant(v) => v.clone(),
        PropertyValue::Animated { timestamps, values } => {
            resolve_keyframes(timestamps, values, interp)
        }
    }
}

enum Track<'a> {
    Numeric(SmallVec<[f64; 8]>),
    Color(SmallVec<[[u8; 3]; 8]>),
    Text(SmallVec<[&'a str; 8]>),
    Mixed,
}

fn classify(values: &[Scalar]) -> Track<'_> {
    if let Some(nums) = values.iter().map(Scalar::as_f64).collect::<Option<SmallVec<_>>>() {
        return Track::Numeric(nums);
    }
    let Some(strs) = values
        .iter()
        .map(Scalar::as_str)
        .collect::<Option<SmallVec<[&str; 8]>>>()
    else {
        return Track::Mixed;
    };
    match strs.iter().map(|s| parse_hex_rgb(s)).collect::<Option<SmallVec<_>>>() {
        Some(colors) => Track::Color(colors),
        None => Track::Text(strs),
    }
}

fn resolve_keyframes<I>(timestamps: &[f64], values: &[Scalar], interp: &I) -> Scalar
where
    I: Interpolate + ?Sized,
{
    let Some(first) = values.first() else {
        tracing::warn!("animated property without keyframes");
        return Scalar::Number(0.0);
    };

    match classify(values) {
        Track::Numeric(nums) => {
            Scalar::Number(interp.interpolate(timestamps, &nums, RESOLVE_EASE))
        }
        Track::Color(colors) => {
            let mut rgb = [0u8; 3];
            for (c, out) in rgb.iter_mut().enumerate() {
                let channel: SmallVec<[f64; 8]> =
                    colors.iter().map(|px| f64::from(px[c])).collect();
                let v = interp.interpolate(timestamps, &channel, RESOLVE_EASE);
                *out = v.round().clamp(0.0, 255.0) as u8;
            }
            Scalar::String(format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2]))
        }
        Track::Text(strs) => {
            resolve_text(timestamps, &strs, interp).unwrap_or_else(|| first.clone())
        }
        Track::Mixed => {
            tracing::warn!(
                keyframes = values.len(),
                "mixed-type animated values are not interpolated; using first keyframe"
            );
            first.clone()
        }
    }
}

fn resolve_text<I>(timestamps: &[f64], strs: &[&str], interp: &I) -> Option<Scalar>
where
    I: Interpolate + ?Sized,
{
    let template = NumericTemplate::scan(strs[0]);
    let others: SmallVec<[NumericTemplate<'_>; 8]> =
        strs[1..].iter().map(|s| NumericTemplate::scan(s)).collect();

    if let Some(bad) = others.iter().position(|t| t.len() != template.len()) {
        tracing::warn!(
            expected = template.len(),
            found = others[bad].len(),
            keyframe = bad + 1,
            "animated string keyframes disagree on numeric runs; using first keyframe"
        );
        return None;
    }

    let mut resolved: SmallVec<[f64; 8]> = SmallVec::with_capacity(template.len());
    for slot in 0..template.len() {
        let track: SmallVec<[f64; 8]> = std::iter::once(&template)
            .chain(others.iter())
            .map(|t| t.slots[slot].value)
            .collect();
        resolved.push(interp.interpolate(timestamps, &track, RESOLVE_EASE));
    }

    Some(Scalar::String(template.render(&resolved)))
}

/// Parse `#RRGGBB` (case-insensitive) into channel bytes.
pub(crate) fn parse_hex_rgb(s: &str) -> Option<[u8; 3]> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([byte(0)?, byte(2)?, byte(4)?])
}

#[cfg(test)]
#[path = "../../tests/unit/animation/resolve.rs"]
mod tests;
