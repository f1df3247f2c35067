//! Standard network configs for tests and benchmarks.

use neurite_core::OptimizerKind;
use neurite_network::{LayerSpec, NetworkConfig};

/// `input(3) → dense(2) → dense(1)`.
pub fn tiny_mlp(optimizer: OptimizerKind) -> NetworkConfig {
    NetworkConfig::new(vec![
        LayerSpec::Input { size: 3 },
        LayerSpec::Dense { size: 2 },
        LayerSpec::Dense { size: 1 },
    ])
    .with_optimizer(optimizer)
}

/// A dense network with the given layer sizes; the first is the input.
pub fn mlp(sizes: &[u32], optimizer: OptimizerKind) -> NetworkConfig {
    let layers = sizes
        .iter()
        .enumerate()
        .map(|(i, &size)| {
            if i == 0 {
                LayerSpec::Input { size }
            } else {
                LayerSpec::Dense { size }
            }
        })
        .collect();
    NetworkConfig::new(layers).with_optimizer(optimizer)
}

/// `input(16) → conv(4 filters, 2 × 3 × 3) → dense(2)`.
pub fn small_conv(optimizer: OptimizerKind) -> NetworkConfig {
    NetworkConfig::new(vec![
        LayerSpec::Input { size: 16 },
        LayerSpec::Conv {
            filters: 4,
            channels: 2,
            filter_size: 3,
        },
        LayerSpec::Dense { size: 2 },
    ])
    .with_optimizer(optimizer)
}

/// `input(784) → dense(128) → dense(10)`.
pub fn mnist_mlp(optimizer: OptimizerKind) -> NetworkConfig {
    mlp(&[784, 128, 10], optimizer)
}
