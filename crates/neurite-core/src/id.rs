//! Strongly-typed identifiers and the [`UnitAddr`] address path.

use std::fmt;

/// Identifies a network instance.
///
/// Assigned by the network registry; `NetworkId(n)` is the n-th slot of
/// the instance table. Every parameter region belongs to exactly one
/// network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkId(pub u32);

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NetworkId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Position of a layer within its network. Layer 0 is the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerIndex(pub u32);

impl fmt::Display for LayerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LayerIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Position of a neuron (or convolutional filter) within its layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeuronIndex(pub u32);

impl fmt::Display for NeuronIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NeuronIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Address path of one parameter-owning unit: `(network, layer, neuron)`.
///
/// Together with a [`FieldRole`](crate::FieldRole) this names exactly one
/// slot in a network's parameter region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitAddr {
    /// Owning network.
    pub network: NetworkId,
    /// Layer within the network.
    pub layer: LayerIndex,
    /// Unit within the layer.
    pub neuron: NeuronIndex,
}

impl UnitAddr {
    /// Build an address from raw indices.
    pub fn new(network: u32, layer: u32, neuron: u32) -> Self {
        Self {
            network: NetworkId(network),
            layer: LayerIndex(layer),
            neuron: NeuronIndex(neuron),
        }
    }
}

impl fmt::Display for UnitAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.network, self.layer, self.neuron)
    }
}
