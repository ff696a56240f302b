//! Static routing table from element name to component schema.
//!
//! The renderer uses it to split each element's resolved props into structural props handed to the
//! component and visual props folded into its style.

/// Whether an element maps to a plain HTML tag or to a component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Plain HTML tag.
    Html,
    /// Composed component (media, layout helpers, unknown names).
    Component,
}

/// A set of prop keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropSet {
    /// Every key.
    All,
    /// Only the listed keys.
    Only(&'static [&'static str]),
    /// Every key except the listed ones.
    AllExcept(&'static [&'static str]),
}

impl PropSet {
    /// The empty set.
    pub const NONE: Self = Self::Only(&[]);

    /// Return `true` when `key` belongs to this set.
    pub fn contains(self, key: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(keys) => keys.iter().any(|k| *k == key),
            Self::AllExcept(keys) => !keys.iter().any(|k| *k == key),
        }
    }
}

/// Where a resolved prop ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropRoute {
    /// Passed to the component as a prop.
    Component,
    /// Folded into the element's style.
    Style,
    /// Neither; the prop is not forwarded.
    Dropped,
}

/// Routing rule for one element name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComponentSchema {
    /// HTML tag or component.
    pub kind: ComponentKind,
    /// Keys forwarded as component props.
    pub component_props: PropSet,
    /// Keys folded into style.
    pub style_props: PropSet,
}

impl ComponentSchema {
    /// Schema used for names the registry does not know: everything is a component prop.
    pub const DEFAULT: Self = Self {
        kind: ComponentKind::Component,
        component_props: PropSet::All,
        style_props: PropSet::NONE,
    };

    /// Route `key`. Component props take precedence over style props.
    pub fn route(&self, key: &str) -> PropRoute {
        if self.component_props.contains(key) {
            PropRoute::Component
        } else if self.style_props.contains(key) {
            PropRoute::Style
        } else {
            PropRoute::Dropped
        }
    }
}

const HTML_PROPS: &[&str] = &["className", "id", "src", "alt", "href"];
const HTML_NON_STYLE: &[&str] = &["className", "id", "src", "alt", "href", "text"];

const FILL_PROPS: &[&str] = &["className", "id"];
const FILL_NON_STYLE: &[&str] = &["className", "id", "text"];

const IMG_PROPS: &[&str] = &["src", "alt", "className"];
const IMG_NON_STYLE: &[&str] = &["src", "alt", "className", "text"];

const VIDEO_PROPS: &[&str] = &[
    "src",
    "startFrom",
    "endAt",
    "volume",
    "muted",
    "playbackRate",
    "loop",
    "className",
];
const VIDEO_NON_STYLE: &[&str] = &[
    "src",
    "startFrom",
    "endAt",
    "volume",
    "muted",
    "playbackRate",
    "loop",
    "className",
    "text",
];

const AUDIO_PROPS: &[&str] = &[
    "src",
    "startFrom",
    "endAt",
    "volume",
    "muted",
    "playbackRate",
    "loop",
];

/// Look up the routing rule for an element name.
pub fn component_schema(name: &str) -> ComponentSchema {
    match name {
        "div" | "span" | "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "section" | "header"
        | "footer" | "ul" | "ol" | "li" | "a" | "img" | "button" | "strong" | "em" => {
            ComponentSchema {
                kind: ComponentKind::Html,
                component_props: PropSet::Only(HTML_PROPS),
                style_props: PropSet::AllExcept(HTML_NON_STYLE),
            }
        }
        "AbsoluteFill" => ComponentSchema {
            kind: ComponentKind::Component,
            component_props: PropSet::Only(FILL_PROPS),
            style_props: PropSet::AllExcept(FILL_NON_STYLE),
        },
        "Img" => ComponentSchema {
            kind: ComponentKind::Component,
            component_props: PropSet::Only(IMG_PROPS),
            style_props: PropSet::AllExcept(IMG_NON_STYLE),
        },
        "Video" | "OffthreadVideo" => ComponentSchema {
            kind: ComponentKind::Component,
            component_props: PropSet::Only(VIDEO_PROPS),
            style_props: PropSet::AllExcept(VIDEO_NON_STYLE),
        },
        "Audio" => ComponentSchema {
            kind: ComponentKind::Component,
            component_props: PropSet::Only(AUDIO_PROPS),
            style_props: PropSet::NONE,
        },
        _ => ComponentSchema::DEFAULT,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/registry.rs"]
mod tests;
