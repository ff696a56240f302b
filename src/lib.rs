//! Blueprint composition engine.
//!
//! Timeline clips describe their visuals with a compact text grammar, one string per element:
//!
//! ```text
//! div;id:card;parent:root;opacity:@animate[0,1]:[0,1]
//! p;id:title;parent:card;text:Hello
//! ```
//!
//! # Pipeline overview
//!
//! 1. **Parse**: element strings -> [`FlatElement`]s, with a synthetic `AbsoluteFill` root in front
//!    ([`parse_blueprint`])
//! 2. **Nest**: flat batch -> [`ElementObject`] tree, children in input order ([`flat_to_nested`])
//! 3. **Resolve** (per frame): [`PropertyValue`] -> [`Scalar`] through a host [`Interpolate`]
//!    primitive ([`resolve_property`]), props routed by [`component_schema`] ([`resolve_element`])
//! 4. **Size**: [`Composition`] -> total frame count at 30 fps ([`duration_in_frames`])
//!
//! Steps 1-2 depend only on the clip's element strings and are memoized by [`BlueprintCache`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure**: no IO and no shared mutable state outside explicit caches.
//! - **Soft visual failures**: a bad visual property degrades with a `tracing` warning; only
//!   unparseable elements and rootless batches are errors.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod blueprint;
mod composition;
mod eval;
mod foundation;
mod schema;

pub use animation::ease::Ease;
pub use animation::interp::{Interpolate, KeyframeInterpolator};
pub use animation::resolve::{RESOLVE_EASE, is_source_relative, resolve_property};
pub use blueprint::cache::{
    BlueprintCache, BlueprintCacheOpts, BlueprintKey, CacheStats, blueprint_key,
};
pub use blueprint::element::{
    BlueprintBatch, FlatElement, parse_blueprint, parse_element, parse_elements,
    with_synthetic_root,
};
pub use blueprint::tree::{Child, ElementObject, flat_to_nested};
pub use blueprint::value::{PropertyValue, Scalar, parse_property_value};
pub use composition::duration::{
    clip_end_secs, duration_in_frames, duration_in_frames_at, timeline_end_secs,
};
pub use composition::model::{Clip, Composition, Track, TransitionSpec};
pub use eval::frame::{
    ResolvedChild, ResolvedElement, ResolvedProp, resolve_clip_at, resolve_element,
};
pub use foundation::core::{
    DURATION_FPS, Fps, MIN_DURATION_FRAMES, ROOT_ID, SYNTHETIC_ROOT_NAME,
};
pub use foundation::error::{BlueprintError, BlueprintResult, ParseCause};
pub use schema::registry::{
    ComponentKind, ComponentSchema, PropRoute, PropSet, component_schema,
};
