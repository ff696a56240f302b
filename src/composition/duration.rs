use crate::{
    composition::model::{Clip, Composition},
    foundation::core::{DURATION_FPS, Fps, MIN_DURATION_FRAMES},
};

/// Total playback length of `comp` in frames at [`DURATION_FPS`].
///
/// Never fails; the result is at least [`MIN_DURATION_FRAMES`].
#[tracing::instrument(skip(comp), fields(tracks = comp.tracks.len()))]
pub fn duration_in_frames(comp: &Composition) -> u64 {
    duration_in_frames_at(comp, DURATION_FPS)
}

/// Same as [`duration_in_frames`] for an arbitrary frame rate.
pub fn duration_in_frames_at(comp: &Composition, fps: Fps) -> u64 {
    let end = timeline_end_secs(comp);
    let frames = fps.secs_to_frames_ceil(end).max(MIN_DURATION_FRAMES);
    tracing::debug!(end_secs = end, frames, "composition duration");
    frames
}

/// Latest candidate end time across all clips, in seconds (`0.0` when empty).
pub fn timeline_end_secs(comp: &Composition) -> f64 {
    comp.clips()
        .map(clip_end_secs)
        .filter(|t| t.is_finite())
        .fold(0.0, f64::max)
}

/// A clip's end time, extended by half of its outgoing transition.
///
/// Every outgoing transition extends the timeline, whether or not a following clip exists.
pub fn clip_end_secs(clip: &Clip) -> f64 {
    let overlap = clip
        .transition_to_next
        .as_ref()
        .map(|t| t.duration_in_seconds)
        .filter(|d| d.is_finite())
        .map_or(0.0, |d| d.max(0.0) / 2.0);
    clip.end_time_in_seconds + overlap
}

#[cfg(test)]
#[path = "../../tests/unit/composition/duration.rs"]
mod tests;
