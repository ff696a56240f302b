/// Convenience result type used across the blueprint engine.
pub type BlueprintResult<T> = Result<T, BlueprintError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only unrecoverable problems surface here: an element string that cannot be parsed, or a batch
/// that cannot be assembled into a tree. Bad visual properties degrade with a logged warning
/// instead (see [`crate::resolve_property`]).
#[derive(thiserror::Error, Debug)]
pub enum BlueprintError {
    /// An element description could not be parsed.
    #[error("parse error in element #{index} ('{element}'): {cause}")]
    Parse {
        /// Position of the element inside the caller-supplied batch.
        index: usize,
        /// The offending element string.
        element: String,
        /// What went wrong.
        cause: ParseCause,
    },

    /// A flat batch could not be assembled into a tree.
    #[error("conversion error: {0}")]
    Conversion(String),

    /// Errors when serializing or deserializing host data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Reason an element string failed to parse.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCause {
    /// The first `;` segment (the component name) is empty.
    #[error("missing component name")]
    MissingName,

    /// No `id:` segment was supplied.
    #[error("missing required 'id' for element '{name}'")]
    MissingId {
        /// Component name of the element lacking an id.
        name: String,
    },

    /// A keyframe timestamp is not a number.
    #[error("property '{key}': invalid animation timestamp '{token}'")]
    BadTimestamp {
        /// Property name.
        key: String,
        /// The token that failed to parse.
        token: String,
    },

    /// Timestamp and value lists have different lengths.
    #[error("property '{key}': {timestamps} timestamps but {values} values")]
    KeyframeCountMismatch {
        /// Property name.
        key: String,
        /// Number of timestamps.
        timestamps: usize,
        /// Number of values.
        values: usize,
    },

    /// An animation needs at least two keyframes.
    #[error("property '{key}': animation needs at least 2 keyframes, got {count}")]
    TooFewKeyframes {
        /// Property name.
        key: String,
        /// Number of keyframes supplied.
        count: usize,
    },

    /// The value starts with `@animate` but does not follow `@animate[..]:[..]`.
    #[error("property '{key}': malformed animation, expected @animate[t0,t1,...]:[v0,v1,...]")]
    MalformedAnimation {
        /// Property name.
        key: String,
    },
}

impl BlueprintError {
    /// Build a [`BlueprintError::Parse`] value.
    pub fn parse(index: usize, element: impl Into<String>, cause: ParseCause) -> Self {
        Self::Parse {
            index,
            element: element.into(),
            cause,
        }
    }

    /// Build a [`BlueprintError::Conversion`] value.
    pub fn conversion(msg: impl Into<String>) -> Self {
        Self::Conversion(msg.into())
    }

    /// Build a [`BlueprintError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return the parse cause when this is a [`BlueprintError::Parse`].
    pub fn parse_cause(&self) -> Option<&ParseCause> {
        match self {
            Self::Parse { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
