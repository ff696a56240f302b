use serde::{Deserialize, Serialize};

use crate::{
    blueprint::element::parse_blueprint,
    blueprint::tree::{ElementObject, flat_to_nested},
    foundation::error::{BlueprintError, BlueprintResult},
};

/// The full editor timeline: an ordered list of tracks.
///
/// Serialized as a bare JSON array of tracks, matching what the editor host sends.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Composition {
    /// Tracks in stacking order.
    pub tracks: Vec<Track>,
}

/// An ordered sequence of clips. Gaps between clips are valid and render transparent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Clips, logically ordered by start time.
    #[serde(default)]
    pub clips: Vec<Clip>,
}

/// A timed segment carrying one element batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    /// Clip identifier.
    pub id: String,
    /// Start on the global timeline, in seconds.
    pub start_time_in_seconds: f64,
    /// End on the global timeline, in seconds.
    pub end_time_in_seconds: f64,
    /// Element descriptions (`"Name;key:value;..."`).
    #[serde(default)]
    pub element: Vec<String>,
    /// Transition into the following clip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_to_next: Option<TransitionSpec>,
    /// Transition out of the preceding clip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_from_previous: Option<TransitionSpec>,
}

/// A cross-clip transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionSpec {
    /// Transition kind as named by the editor (`fade`, `slide`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Transition length in seconds.
    pub duration_in_seconds: f64,
}

impl Composition {
    /// Parse a composition from a JSON string.
    pub fn from_json_str(s: &str) -> BlueprintResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| BlueprintError::serde(format!("parse composition JSON: {e}")))
    }

    /// Parse a composition from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> BlueprintResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| BlueprintError::serde(format!("parse composition JSON: {e}")))
    }

    /// Iterate over every clip in every track.
    pub fn clips(&self) -> impl Iterator<Item = &Clip> {
        self.tracks.iter().flat_map(|t| t.clips.iter())
    }
}

impl Clip {
    /// Parse this clip's element batch into a render tree.
    ///
    /// Hosts rendering many frames should go through [`crate::BlueprintCache`] instead.
    pub fn element_tree(&self) -> BlueprintResult<ElementObject> {
        let batch = parse_blueprint(self.element.as_slice())?;
        flat_to_nested(&batch.elements)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
