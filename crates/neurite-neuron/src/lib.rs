//! Per-unit parameter and optimizer state allocation.
//!
//! A unit (a dense-layer [`Neuron`] or a convolutional [`Filter`]) owns no
//! numbers itself. At network build time [`allocate_params`] binds its
//! bias, weights, gradient accumulators and optimizer state into the
//! network's [`ParamArena`](neurite_arena::ParamArena), in a fixed order,
//! zero-initialised. What comes back is a set of typed, `Copy` views
//! ([`ScalarSlot`], [`ArraySlot`]) plus an [`OptimizerState`] variant that
//! says exactly which state fields exist.
//!
//! ```text
//! bias → weights → deltaBias → deltaWeights → [optimizer fields]
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod filter;
pub mod neuron;
pub mod params;
pub mod slot;
pub mod state;

pub use filter::{Filter, FilterShape};
pub use neuron::{Neuron, UnboundNeuron};
pub use params::{allocate_params, UnitParams};
pub use slot::{ArraySlot, ScalarSlot};
pub use state::{AdaDeltaState, AdamState, CacheState, GainState, OptimizerState};
