use crate::animation::ease::Ease;

/// Host-supplied keyframe interpolation primitive.
///
/// Given keyframe `timestamps` (seconds, ascending) and numeric `values`, an implementation maps
/// the current global-timeline instant into the bracketing keyframe pair, applies `ease` between
/// them, and clamps to the first/last value outside the keyframe range.
pub trait Interpolate {
    /// Interpolate `values` over `timestamps` at the implementation's current instant.
    fn interpolate(&self, timestamps: &[f64], values: &[f64], ease: Ease) -> f64;
}

impl<F> Interpolate for F
where
    F: Fn(&[f64], &[f64], Ease) -> f64,
{
    fn interpolate(&self, timestamps: &[f64], values: &[f64], ease: Ease) -> f64 {
        self(timestamps, values, ease)
    }
}

/// Reference [`Interpolate`] implementation sampling at a fixed global time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyframeInterpolator {
    /// Global-timeline instant, in seconds.
    pub time_sec: f64,
}

impl KeyframeInterpolator {
    /// Sample at `time_sec` seconds.
    pub fn at_seconds(time_sec: f64) -> Self {
        Self { time_sec }
    }

    /// Sample at a global frame index for the given frame rate.
    pub fn at_frame(frame: u64, fps: crate::foundation::core::Fps) -> Self {
        Self {
            time_sec: (frame as f64) / fps.as_f64(),
        }
    }
}

impl Interpolate for KeyframeInterpolator {
    fn interpolate(&self, timestamps: &[f64], values: &[f64], ease: Ease) -> f64 {
        let n = timestamps.len().min(values.len());
        if n == 0 {
            return 0.0;
        }
        let (timestamps, values) = (&timestamps[..n], &values[..n]);

        let t = self.time_sec;
        let idx = timestamps.partition_point(|k| *k <= t);

        if idx == 0 {
            return values[0];
        }
        if idx >= n {
            return values[n - 1];
        }

        let (a_t, b_t) = (timestamps[idx - 1], timestamps[idx]);
        let (a, b) = (values[idx - 1], values[idx]);
        let denom = b_t - a_t;
        if denom <= 0.0 {
            return a;
        }

        let te = ease.apply((t - a_t) / denom);
        a + (b - a) * te
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
