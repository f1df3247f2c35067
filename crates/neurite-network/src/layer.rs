//! Built layers.

use neurite_core::LayerIndex;
use neurite_neuron::{Filter, Neuron, UnitParams};

use crate::config::{Joined, LayerSpec};

/// The bound units of one layer.
#[derive(Clone, Debug, PartialEq)]
pub enum LayerUnits {
    /// The input layer owns nothing.
    Input,
    /// Dense neurons, in neuron-index order.
    Dense(Vec<Neuron>),
    /// Convolutional filters, in filter-index order.
    Conv(Vec<Filter>),
}

/// A layer after network build.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub(crate) index: LayerIndex,
    pub(crate) spec: LayerSpec,
    pub(crate) joined: Joined,
    pub(crate) units: LayerUnits,
}

impl Layer {
    /// Position in the network.
    pub fn index(&self) -> LayerIndex {
        self.index
    }

    /// The description this layer was built from.
    pub fn spec(&self) -> &LayerSpec {
        &self.spec
    }

    /// Number of outputs.
    pub fn size(&self) -> u32 {
        self.spec.size()
    }

    /// Incoming connections per unit.
    pub fn fan_in(&self) -> u32 {
        self.joined.fan_in
    }

    /// Outgoing connections per input: the next layer's size for dense
    /// layers (zero for the last), `filters × filter_size²` for conv layers.
    pub fn fan_out(&self) -> u32 {
        self.joined.fan_out
    }

    /// The bound units.
    pub fn units(&self) -> &LayerUnits {
        &self.units
    }

    /// Dense neurons; empty for other layer kinds.
    pub fn neurons(&self) -> &[Neuron] {
        match &self.units {
            LayerUnits::Dense(neurons) => neurons,
            _ => &[],
        }
    }

    /// Convolutional filters; empty for other layer kinds.
    pub fn filters(&self) -> &[Filter] {
        match &self.units {
            LayerUnits::Conv(filters) => filters,
            _ => &[],
        }
    }

    /// Parameters of every unit in the layer, in unit order.
    pub fn unit_params(&self) -> Box<dyn Iterator<Item = &UnitParams> + '_> {
        match &self.units {
            LayerUnits::Input => Box::new(std::iter::empty()),
            LayerUnits::Dense(neurons) => Box::new(neurons.iter().map(Neuron::params)),
            LayerUnits::Conv(filters) => Box::new(filters.iter().map(Filter::params)),
        }
    }
}
