//! Error types shared across the workspace.

use std::error::Error;
use std::fmt;

/// An optimizer name did not match any known [`OptimizerKind`](crate::OptimizerKind).
///
/// Returned by the strict `FromStr` parse. The lenient parse
/// ([`OptimizerKind::from_name_lenient`](crate::OptimizerKind::from_name_lenient))
/// never produces it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownOptimizer {
    /// The name that failed to parse.
    pub name: String,
}

impl fmt::Display for UnknownOptimizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown optimizer kind '{}'", self.name)
    }
}

impl Error for UnknownOptimizer {}
