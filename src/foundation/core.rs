use crate::foundation::error::{BlueprintError, BlueprintResult};

/// Id reserved for the synthetic root element injected into every parsed batch.
pub const ROOT_ID: &str = "root";

/// Component name of the synthetic root element.
pub const SYNTHETIC_ROOT_NAME: &str = "AbsoluteFill";

/// Literal token that callers may use for "no parent".
pub(crate) const NULL_TOKEN: &str = "null";

/// Frame rate used when sizing the playback timeline.
pub const DURATION_FPS: Fps = Fps { num: 30, den: 1 };

/// Smallest duration ever reported, so an empty timeline still has one frame.
pub const MIN_DURATION_FRAMES: u64 = 1;

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> BlueprintResult<Self> {
        if den == 0 {
            return Err(BlueprintError::Other(anyhow::anyhow!("Fps den must be > 0")));
        }
        if num == 0 {
            return Err(BlueprintError::Other(anyhow::anyhow!("Fps num must be > 0")));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Convert seconds to frame count using ceiling semantics.
    ///
    /// Products within `1e-9` of a whole frame snap to it, so `0.1s @ 30fps` is 3 frames rather
    /// than 4 after float round-off.
    pub fn secs_to_frames_ceil(self, secs: f64) -> u64 {
        const SNAP: f64 = 1e-9;
        if !secs.is_finite() {
            return 0;
        }
        let frames = secs * self.as_f64();
        let nearest = frames.round();
        let frames = if (frames - nearest).abs() < SNAP {
            nearest
        } else {
            frames.ceil()
        };
        frames.max(0.0) as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
