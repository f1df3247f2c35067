//! Neurite: arena-backed neural network parameters and optimizer state.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Neurite sub-crates. Adding `neurite` as a single dependency is enough
//! for most users.
//!
//! # Quick start
//!
//! ```rust
//! use neurite::prelude::*;
//!
//! let config = NetworkConfig::new(vec![
//!     LayerSpec::Input { size: 3 },
//!     LayerSpec::Dense { size: 2 },
//! ])
//! .with_optimizer(OptimizerKind::Adam);
//!
//! let mut net = Network::build(NetworkId(0), config).unwrap();
//! let neuron = net.layer(1).unwrap().neurons()[0];
//! assert_eq!(neuron.weights().read(net.arena()), &[0.0, 0.0, 0.0]);
//!
//! neuron.bias().set(net.arena_mut(), 0.5);
//! let bias = net.arena().read(neuron.addr(), FieldRole::Bias).unwrap();
//! assert_eq!(bias, &[0.5]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `neurite-core` | IDs, field roles, optimizer kinds, access traits |
//! | [`arena`] | `neurite-arena` | Parameter region, binding table, capacity planning |
//! | [`neuron`] | `neurite-neuron` | Neurons, filters, optimizer state |
//! | [`network`] | `neurite-network` | Network build, layers, registry |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`neurite-core`).
///
/// Contains [`types::FieldRole`], [`types::OptimizerKind`] and the access
/// traits [`types::ParamReader`] and [`types::ParamWriter`].
pub use neurite_core as types;

/// Parameter region and binding table (`neurite-arena`).
pub use neurite_arena as arena;

/// Neurons, filters and per-kind optimizer state (`neurite-neuron`).
///
/// [`neuron::UnboundNeuron::bind`] is the allocator entry point for a
/// single unit.
pub use neurite_neuron as neuron;

/// Network construction (`neurite-network`).
pub use neurite_network as network;

/// Common imports for typical Neurite usage.
///
/// ```rust
/// use neurite::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use neurite_core::{
        FieldRole, LayerIndex, NetworkId, NeuronIndex, OptimizerKind, ParamReader, ParamWriter,
        UnitAddr,
    };

    // Region
    pub use neurite_arena::{ArenaConfig, ArenaError, ParamArena};

    // Units
    pub use neurite_neuron::{Filter, Neuron, OptimizerState, UnboundNeuron};

    // Network
    pub use neurite_network::{
        BuildError, LayerSpec, Network, NetworkConfig, NetworkRegistry, WeightInit,
    };
}
