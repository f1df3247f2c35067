//! Shared numeric parameter region for Neurite networks.
//!
//! Every trainable value and every piece of optimizer state a network owns
//! lives in one contiguous, pre-allocated `f64` region. Units do not own
//! their numbers; they hold [`SlotHandle`]s returned by
//! [`ParamArena::bind`], which is the only way slots come into existence.
//!
//! # Architecture
//!
//! ```text
//! ParamArena (one per network)
//! ├── Segment (single pre-sized Vec<f64>, bump cursor, zero-init on bind)
//! └── BindingTable ((UnitAddr, FieldRole) → SlotHandle, allocation order)
//! ```
//!
//! # Layout
//!
//! Slots are laid out contiguously in bind order starting at offset 0.
//! Because units are bound in a fixed order with a fixed role order, a
//! slot's offset can also be computed analytically from
//! [`plan_capacity`] over the preceding units.
//!
//! # Capacity
//!
//! The region never grows. Its size is decided up front (see
//! [`ArenaConfig::planned`]); a bind that does not fit fails with
//! [`ArenaError::CapacityExceeded`] and records nothing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod binding;
pub mod config;
pub mod error;
pub mod handle;
pub mod plan;
pub mod segment;

// Public re-exports for the primary API surface.
pub use arena::ParamArena;
pub use binding::BindingTable;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::SlotHandle;
pub use plan::plan_capacity;
