use crate::foundation::error::{BlueprintError, BlueprintResult};

/// Easing curve requested from the host interpolation primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Quadratic ease-in.
    #[serde(rename = "in")]
    In,
    /// Quadratic ease-out.
    #[serde(rename = "out")]
    Out,
    /// Quadratic ease-in/out. The only curve the resolver asks for.
    #[default]
    #[serde(rename = "inOut")]
    InOut,
    /// Linear interpolation.
    #[serde(rename = "linear")]
    Linear,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::In => t * t,
            Self::Out => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
        }
    }

    /// Wire name used by host renderers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inOut",
            Self::Linear => "linear",
        }
    }
}

impl std::str::FromStr for Ease {
    type Err = BlueprintError;

    fn from_str(s: &str) -> BlueprintResult<Self> {
        match s.trim() {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            "inOut" => Ok(Self::InOut),
            "linear" => Ok(Self::Linear),
            other => Err(BlueprintError::Other(anyhow::anyhow!(
                "unknown easing '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
