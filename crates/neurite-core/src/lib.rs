//! Core types and traits for Neurite.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the arena, the allocator and the network
//! container: unit addresses, optimizer kinds, field roles, error types
//! and the address-path access traits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod optimizer;
pub mod role;
pub mod traits;

pub use error::UnknownOptimizer;
pub use id::{LayerIndex, NetworkId, NeuronIndex, UnitAddr};
pub use optimizer::{OptimizerKind, RoleList};
pub use role::FieldRole;
pub use traits::{ParamReader, ParamWriter};
