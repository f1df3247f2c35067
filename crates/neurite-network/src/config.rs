//! Network configuration and layer joining.

use neurite_core::OptimizerKind;
use neurite_neuron::FilterShape;
use smallvec::SmallVec;

use crate::error::ConfigError;
use crate::init::WeightInit;

/// One layer of a network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerSpec {
    /// Input layer. Owns no parameters; only allowed at index 0.
    Input {
        /// Number of input values.
        size: u32,
    },
    /// Fully connected layer; each neuron sees every output of the
    /// previous layer.
    Dense {
        /// Number of neurons.
        size: u32,
    },
    /// Convolutional layer; each filter owns a `channels × filter_size ×
    /// filter_size` weight volume.
    Conv {
        /// Number of filters.
        filters: u32,
        /// Input channels per filter.
        channels: u32,
        /// Kernel width and height.
        filter_size: u32,
    },
}

impl LayerSpec {
    /// Number of outputs this layer feeds forward (neurons, filters or
    /// inputs).
    pub fn size(&self) -> u32 {
        match *self {
            Self::Input { size } | Self::Dense { size } => size,
            Self::Conv { filters, .. } => filters,
        }
    }

    /// Whether this is the input layer.
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Input { .. })
    }

    /// Kernel shape of a conv layer.
    pub fn filter_shape(&self) -> Option<FilterShape> {
        match *self {
            Self::Conv {
                channels,
                filter_size,
                ..
            } => Some(FilterShape::new(channels, filter_size)),
            _ => None,
        }
    }
}

/// Fan-in and fan-out of a layer once joined to its neighbours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Joined {
    /// Incoming connections per unit. Zero for the input layer.
    pub fan_in: u32,
    /// Outgoing connections per input, used to scale weight
    /// initialisation. For dense layers this is the next layer's size (zero
    /// for the last layer); for conv layers it is `filters × filter_size²`.
    pub fan_out: u32,
}

/// Builder input for [`Network::build`](crate::Network::build).
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
    /// Layers in forward order. Layer 0 must be [`LayerSpec::Input`].
    pub layers: Vec<LayerSpec>,
    /// Update rule every unit is allocated state for.
    pub optimizer: OptimizerKind,
    /// How [`Network::initialize_weights`](crate::Network::initialize_weights)
    /// fills weights. Binding itself always zero-initialises.
    pub weight_init: WeightInit,
}

impl NetworkConfig {
    /// Config with the given layers, plain optimizer and zero weights.
    pub fn new(layers: Vec<LayerSpec>) -> Self {
        Self {
            layers,
            optimizer: OptimizerKind::default(),
            weight_init: WeightInit::default(),
        }
    }

    /// Set the optimizer.
    pub fn with_optimizer(mut self, optimizer: OptimizerKind) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// Set the weight initialisation.
    pub fn with_weight_init(mut self, weight_init: WeightInit) -> Self {
        self.weight_init = weight_init;
        self
    }

    /// Check structural invariants.
    ///
    /// Capacity overflow is detected later, when the region is planned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layers.len() < 2 {
            return Err(ConfigError::TooFewLayers {
                count: self.layers.len(),
            });
        }
        if !self.layers[0].is_input() {
            return Err(ConfigError::InputNotFirst);
        }
        for (index, layer) in self.layers.iter().enumerate() {
            if index > 0 && layer.is_input() {
                return Err(ConfigError::MisplacedInput { index });
            }
            if layer.size() == 0 {
                return Err(ConfigError::EmptyLayer { index });
            }
            if let Some(shape) = layer.filter_shape() {
                match shape.volume() {
                    None => return Err(ConfigError::KernelTooLarge { index }),
                    Some(0) => return Err(ConfigError::EmptyLayer { index }),
                    Some(_) => {}
                }
            }
        }
        self.weight_init.validate()
    }

    /// Work out each layer's fan-in and fan-out.
    ///
    /// Dense layers take the previous layer's size as fan-in; conv layers
    /// take their kernel volume as fan-in and `filters × filter_size²` as
    /// fan-out.
    pub fn join(&self) -> SmallVec<[Joined; 8]> {
        let n = self.layers.len();
        (0..n)
            .map(|l| {
                let fan_in = match self.layers[l] {
                    LayerSpec::Input { .. } => 0,
                    LayerSpec::Dense { .. } => l.checked_sub(1).map_or(0, |p| self.layers[p].size()),
                    LayerSpec::Conv { .. } => self.layers[l]
                        .filter_shape()
                        .and_then(|s| s.volume())
                        .unwrap_or(0),
                };
                let fan_out = match self.layers[l] {
                    LayerSpec::Conv {
                        filters,
                        filter_size,
                        ..
                    } => filters.saturating_mul(filter_size.saturating_mul(filter_size)),
                    _ => self.layers.get(l + 1).map_or(0, LayerSpec::size),
                };
                Joined { fan_in, fan_out }
            })
            .collect()
    }

    /// `(fan_in, optimizer)` for every unit that will be bound, in bind
    /// order.
    pub fn units(&self) -> impl Iterator<Item = (u32, OptimizerKind)> + '_ {
        let joined = self.join();
        let optimizer = self.optimizer;
        self.layers
            .iter()
            .zip(joined)
            .skip(1)
            .flat_map(move |(layer, j)| (0..layer.size()).map(move |_| (j.fan_in, optimizer)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mlp() -> NetworkConfig {
        NetworkConfig::new(vec![
            LayerSpec::Input { size: 4 },
            LayerSpec::Dense { size: 3 },
            LayerSpec::Dense { size: 2 },
        ])
    }

    #[test]
    fn valid_mlp_passes() {
        assert_eq!(mlp().validate(), Ok(()));
    }

    #[test]
    fn single_layer_is_rejected() {
        let config = NetworkConfig::new(vec![LayerSpec::Input { size: 4 }]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooFewLayers { count: 1 })
        );
    }

    #[test]
    fn first_layer_must_be_input() {
        let config = NetworkConfig::new(vec![
            LayerSpec::Dense { size: 4 },
            LayerSpec::Dense { size: 2 },
        ]);
        assert_eq!(config.validate(), Err(ConfigError::InputNotFirst));
    }

    #[test]
    fn input_after_first_is_rejected() {
        let config = NetworkConfig::new(vec![
            LayerSpec::Input { size: 4 },
            LayerSpec::Input { size: 2 },
        ]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::MisplacedInput { index: 1 })
        );
    }

    #[test]
    fn empty_layers_are_rejected() {
        let config = NetworkConfig::new(vec![
            LayerSpec::Input { size: 4 },
            LayerSpec::Dense { size: 0 },
        ]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyLayer { index: 1 }));

        let conv = NetworkConfig::new(vec![
            LayerSpec::Input { size: 4 },
            LayerSpec::Conv {
                filters: 2,
                channels: 0,
                filter_size: 3,
            },
        ]);
        assert_eq!(conv.validate(), Err(ConfigError::EmptyLayer { index: 1 }));
    }

    #[test]
    fn oversized_kernel_is_rejected() {
        let config = NetworkConfig::new(vec![
            LayerSpec::Input { size: 4 },
            LayerSpec::Conv {
                filters: 1,
                channels: u32::MAX,
                filter_size: 2,
            },
        ]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::KernelTooLarge { index: 1 })
        );
    }

    #[test]
    fn join_computes_fan_in_and_fan_out() {
        let joined = mlp().join();
        assert_eq!(joined[0], Joined { fan_in: 0, fan_out: 3 });
        assert_eq!(joined[1], Joined { fan_in: 4, fan_out: 2 });
        assert_eq!(joined[2], Joined { fan_in: 3, fan_out: 0 });
    }

    #[test]
    fn conv_fan_in_is_kernel_volume() {
        let config = NetworkConfig::new(vec![
            LayerSpec::Input { size: 16 },
            LayerSpec::Conv {
                filters: 4,
                channels: 2,
                filter_size: 3,
            },
            LayerSpec::Dense { size: 2 },
        ]);
        let joined = config.join();
        assert_eq!(joined[1].fan_in, 18);
        assert_eq!(joined[2].fan_in, 4);
        assert_eq!(joined[0].fan_out, 4);
        assert_eq!(joined[2].fan_out, 0);
    }

    #[test]
    fn conv_fan_out_is_filters_times_kernel_area() {
        let config = NetworkConfig::new(vec![
            LayerSpec::Input { size: 16 },
            LayerSpec::Conv {
                filters: 4,
                channels: 2,
                filter_size: 3,
            },
            LayerSpec::Dense { size: 2 },
        ]);
        // 4 filters of 3 × 3, independent of the next layer's size
        assert_eq!(config.join()[1], Joined { fan_in: 18, fan_out: 36 });
    }

    #[test]
    fn units_skip_input_layer() {
        let units: Vec<_> = mlp().with_optimizer(OptimizerKind::Adam).units().collect();
        assert_eq!(
            units,
            [
                (4, OptimizerKind::Adam),
                (4, OptimizerKind::Adam),
                (4, OptimizerKind::Adam),
                (3, OptimizerKind::Adam),
                (3, OptimizerKind::Adam),
            ]
        );
    }
}
