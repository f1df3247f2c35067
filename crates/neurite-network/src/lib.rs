//! Network and layer container for Neurite.
//!
//! [`Network::build`] turns a [`NetworkConfig`] into a network whose every
//! neuron and filter is bound into one [`ParamArena`](neurite_arena::ParamArena):
//! it validates the config, sizes the region from a capacity plan, joins
//! the layers to work out each unit's fan-in, and then binds units layer by
//! layer, unit by unit, exactly once each. Either every unit is bound or
//! the build fails and nothing is returned.
//!
//! [`NetworkRegistry`] keeps live networks addressable by [`NetworkId`](neurite_core::NetworkId).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod init;
pub mod layer;
pub mod network;
pub mod registry;

pub use config::{LayerSpec, NetworkConfig};
pub use error::{BuildError, ConfigError};
pub use init::WeightInit;
pub use layer::{Layer, LayerUnits};
pub use network::Network;
pub use registry::NetworkRegistry;
