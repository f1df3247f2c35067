//! Benchmark profiles for the Neurite parameter allocator.
//!
//! - [`reference_profile`]: `784 → 128 → 64 → 10` dense network
//! - [`conv_profile`]: small convolutional stack
//! - [`wide_profile`]: one very wide hidden layer for capacity planning

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use neurite_core::OptimizerKind;
use neurite_network::{LayerSpec, NetworkConfig, WeightInit};

/// Reference dense network with Xavier init.
pub fn reference_profile(optimizer: OptimizerKind) -> NetworkConfig {
    NetworkConfig::new(vec![
        LayerSpec::Input { size: 784 },
        LayerSpec::Dense { size: 128 },
        LayerSpec::Dense { size: 64 },
        LayerSpec::Dense { size: 10 },
    ])
    .with_optimizer(optimizer)
    .with_weight_init(WeightInit::Xavier)
}

/// Two conv layers feeding a dense classifier.
pub fn conv_profile(optimizer: OptimizerKind) -> NetworkConfig {
    NetworkConfig::new(vec![
        LayerSpec::Input { size: 1024 },
        LayerSpec::Conv {
            filters: 16,
            channels: 3,
            filter_size: 5,
        },
        LayerSpec::Conv {
            filters: 32,
            channels: 16,
            filter_size: 3,
        },
        LayerSpec::Dense { size: 10 },
    ])
    .with_optimizer(optimizer)
}

/// `input(1024) → dense(width) → dense(1)`.
pub fn wide_profile(width: u32, optimizer: OptimizerKind) -> NetworkConfig {
    NetworkConfig::new(vec![
        LayerSpec::Input { size: 1024 },
        LayerSpec::Dense { size: width },
        LayerSpec::Dense { size: 1 },
    ])
    .with_optimizer(optimizer)
}
