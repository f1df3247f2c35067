//! Network construction and whole-network parameter operations.

use neurite_arena::{ArenaConfig, ParamArena, SlotHandle};
use neurite_core::{LayerIndex, NetworkId, NeuronIndex, OptimizerKind, UnitAddr};
use neurite_neuron::{Filter, UnboundNeuron};

use crate::config::{LayerSpec, NetworkConfig};
use crate::error::{BuildError, ConfigError};
use crate::init::seeded_rng;
use crate::layer::{Layer, LayerUnits};

/// A built network: its layers and the region that backs every unit.
///
/// The network owns the region. Dropping the network tears it down.
#[derive(Debug)]
pub struct Network {
    id: NetworkId,
    config: NetworkConfig,
    arena: ParamArena,
    layers: Vec<Layer>,
    validation_backup: Option<Vec<f64>>,
}

impl Network {
    /// Build a network from `config`.
    ///
    /// Validates the config, sizes the region exactly from the capacity
    /// plan, joins the layers and binds every neuron and filter once, layer
    /// by layer in index order. On error nothing is returned and the
    /// partially bound region is dropped.
    pub fn build(id: NetworkId, config: NetworkConfig) -> Result<Self, BuildError> {
        config.validate()?;
        let arena_config = ArenaConfig::planned(id, config.units())?;
        let mut arena = ParamArena::new(arena_config)?;

        let joined = config.join();
        let optimizer = config.optimizer;
        let mut layers = Vec::with_capacity(config.layers.len());
        for (l, (spec, joined)) in config.layers.iter().zip(joined).enumerate() {
            let index = LayerIndex(l as u32);
            let units = bind_layer(&mut arena, id, index, spec, joined.fan_in, optimizer)?;
            tracing::debug!(
                network = %id,
                layer = %index,
                size = spec.size(),
                fan_in = joined.fan_in,
                "bound layer"
            );
            layers.push(Layer {
                index,
                spec: *spec,
                joined,
                units,
            });
        }

        tracing::info!(
            network = %id,
            layers = layers.len(),
            optimizer = %optimizer,
            slots = arena.used(),
            bindings = arena.binding_count(),
            "network built"
        );

        Ok(Self {
            id,
            config,
            arena,
            layers,
            validation_backup: None,
        })
    }

    /// Identity of this network.
    pub fn id(&self) -> NetworkId {
        self.id
    }

    /// Config the network was built from.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Optimizer every unit was bound for.
    pub fn optimizer(&self) -> OptimizerKind {
        self.config.optimizer
    }

    /// The parameter region.
    pub fn arena(&self) -> &ParamArena {
        &self.arena
    }

    /// The parameter region, mutably. This is what an execution engine
    /// reads and writes.
    pub fn arena_mut(&mut self) -> &mut ParamArena {
        &mut self.arena
    }

    /// All layers, input first.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layer `index`, if it exists.
    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Total number of bound units.
    pub fn unit_count(&self) -> usize {
        self.layers.iter().map(|l| l.unit_params().count()).sum()
    }

    /// Zero every gradient accumulator in the network.
    ///
    /// Returns the number of elements cleared.
    pub fn reset_deltas(&mut self) -> usize {
        self.arena.zero_roles(|role| role.is_delta())
    }

    /// Copy every bias and weight aside, replacing any earlier copy.
    pub fn back_up_validation(&mut self) {
        let handles = self.parameter_handles();
        let mut backup = Vec::with_capacity(handles.iter().map(|h| h.len() as usize).sum());
        for handle in handles {
            backup.extend_from_slice(self.arena.slice(handle));
        }
        self.validation_backup = Some(backup);
    }

    /// Write the last [`back_up_validation`](Self::back_up_validation) copy
    /// back. Returns `false` if there is no copy.
    pub fn restore_validation(&mut self) -> bool {
        let Some(backup) = self.validation_backup.as_deref() else {
            return false;
        };
        let mut cursor = 0;
        for handle in self.parameter_handles() {
            let len = handle.len() as usize;
            self.arena
                .slice_mut(handle)
                .copy_from_slice(&backup[cursor..cursor + len]);
            cursor += len;
        }
        true
    }

    /// Whether a validation backup exists.
    pub fn has_validation_backup(&self) -> bool {
        self.validation_backup.is_some()
    }

    /// Fill every unit's weights according to the configured
    /// [`WeightInit`](crate::WeightInit), deterministically for `seed`.
    /// Biases, deltas and optimizer state are untouched.
    pub fn initialize_weights(&mut self, seed: u64) {
        let init = self.config.weight_init;
        let mut rng = seeded_rng(seed);
        for layer in &self.layers {
            let (fan_in, fan_out) = (layer.fan_in(), layer.fan_out());
            for params in layer.unit_params() {
                let weights = params.weights.write(&mut self.arena);
                init.fill(&mut rng, weights, fan_in, fan_out);
            }
        }
    }

    fn parameter_handles(&self) -> Vec<SlotHandle> {
        self.arena
            .bindings()
            .iter()
            .filter(|(_, role, _)| role.is_parameter())
            .map(|(_, _, handle)| handle)
            .collect()
    }
}

fn bind_layer(
    arena: &mut ParamArena,
    network: NetworkId,
    layer: LayerIndex,
    spec: &LayerSpec,
    fan_in: u32,
    optimizer: OptimizerKind,
) -> Result<LayerUnits, BuildError> {
    let addr = |n: u32| UnitAddr {
        network,
        layer,
        neuron: NeuronIndex(n),
    };
    Ok(match spec {
        LayerSpec::Input { .. } => LayerUnits::Input,
        LayerSpec::Dense { size } => LayerUnits::Dense(
            (0..*size)
                .map(|n| UnboundNeuron::new(addr(n), fan_in).bind(arena, optimizer))
                .collect::<Result<_, _>>()?,
        ),
        LayerSpec::Conv { filters, .. } => {
            let shape = spec.filter_shape().ok_or(ConfigError::EmptyLayer {
                index: layer.0 as usize,
            })?;
            LayerUnits::Conv(
                (0..*filters)
                    .map(|n| Filter::bind(arena, addr(n), shape, optimizer))
                    .collect::<Result<_, _>>()?,
            )
        }
    })
}
