//! Network configuration and build errors.

use std::error::Error;
use std::fmt;

use neurite_arena::ArenaError;

/// Errors detected during [`NetworkConfig::validate()`](crate::NetworkConfig::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A network needs an input layer and at least one parameterised layer.
    TooFewLayers {
        /// Number of layers configured.
        count: usize,
    },
    /// Layer 0 is not an input layer.
    InputNotFirst,
    /// An input layer appears after layer 0.
    MisplacedInput {
        /// Index of the offending layer.
        index: usize,
    },
    /// A layer has no units, or a conv layer has an empty kernel.
    EmptyLayer {
        /// Index of the offending layer.
        index: usize,
    },
    /// A conv layer's kernel volume overflows `u32`.
    KernelTooLarge {
        /// Index of the offending layer.
        index: usize,
    },
    /// Weight initialisation parameters are invalid.
    InvalidWeightInit {
        /// Description of the problem.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewLayers { count } => {
                write!(f, "network needs at least 2 layers, got {count}")
            }
            Self::InputNotFirst => write!(f, "layer 0 must be an input layer"),
            Self::MisplacedInput { index } => {
                write!(f, "input layer at index {index}; only layer 0 may be an input")
            }
            Self::EmptyLayer { index } => write!(f, "layer {index} is empty"),
            Self::KernelTooLarge { index } => {
                write!(f, "kernel volume of layer {index} overflows u32")
            }
            Self::InvalidWeightInit { reason } => {
                write!(f, "invalid weight init: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from [`Network::build`](crate::Network::build).
///
/// A failed build returns no network; the partially bound region is
/// dropped with it.
#[derive(Clone, Debug, PartialEq)]
pub enum BuildError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// Planning or binding the parameter region failed.
    Arena(ArenaError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Arena(e) => write!(f, "arena: {e}"),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Arena(e) => Some(e),
        }
    }
}

impl From<ConfigError> for BuildError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ArenaError> for BuildError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_error_chains_source() {
        let err = BuildError::from(ConfigError::InputNotFirst);
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("layer 0 must be an input layer"));
        assert_eq!(err.to_string(), "config: layer 0 must be an input layer");
    }
}
