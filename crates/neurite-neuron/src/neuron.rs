//! Dense-layer neurons.
//!
//! A neuron has two states. [`UnboundNeuron`] knows its identity and
//! fan-in but owns no slots. [`UnboundNeuron::bind`] consumes it and
//! returns a [`Neuron`] whose field set is fixed from then on. There is no
//! way back. A second unbound neuron with the same address is rejected by
//! the region with [`ArenaError::AlreadyBound`].

use neurite_arena::{ArenaError, ParamArena};
use neurite_core::{OptimizerKind, UnitAddr};

use crate::params::{allocate_params, UnitParams};
use crate::slot::{ArraySlot, ScalarSlot};
use crate::state::OptimizerState;

/// A neuron with an identity and fan-in but no bound fields yet.
#[derive(Debug, PartialEq, Eq)]
pub struct UnboundNeuron {
    addr: UnitAddr,
    fan_in: u32,
}

impl UnboundNeuron {
    /// A neuron at `addr` with `fan_in` incoming connections. A fan-in of
    /// zero is a bias-only neuron.
    pub fn new(addr: UnitAddr, fan_in: u32) -> Self {
        Self { addr, fan_in }
    }

    /// Address of the neuron.
    pub fn addr(&self) -> UnitAddr {
        self.addr
    }

    /// Number of incoming connections.
    pub fn fan_in(&self) -> u32 {
        self.fan_in
    }

    /// Bind every field the neuron needs for `kind` into `arena`.
    pub fn bind(self, arena: &mut ParamArena, kind: OptimizerKind) -> Result<Neuron, ArenaError> {
        let params = allocate_params(arena, self.addr, self.fan_in, kind)?;
        Ok(Neuron {
            addr: self.addr,
            params,
        })
    }

    /// Like [`bind`](Self::bind), taking the optimizer by name.
    ///
    /// Unrecognised names bind a plain neuron (see
    /// [`OptimizerKind::from_name_lenient`]).
    pub fn bind_named(self, arena: &mut ParamArena, optimizer: &str) -> Result<Neuron, ArenaError> {
        self.bind(arena, OptimizerKind::from_name_lenient(optimizer))
    }
}

/// A neuron whose fields are bound into its network's region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neuron {
    addr: UnitAddr,
    params: UnitParams,
}

impl Neuron {
    /// Address of the neuron.
    pub fn addr(&self) -> UnitAddr {
        self.addr
    }

    /// Number of incoming connections.
    pub fn fan_in(&self) -> usize {
        self.params.fan_in()
    }

    /// Optimizer the neuron was bound for.
    pub fn kind(&self) -> OptimizerKind {
        self.params.kind()
    }

    /// All bound fields.
    pub fn params(&self) -> &UnitParams {
        &self.params
    }

    /// Bias slot.
    pub fn bias(&self) -> ScalarSlot {
        self.params.bias
    }

    /// Weights slot.
    pub fn weights(&self) -> ArraySlot {
        self.params.weights
    }

    /// Accumulated bias gradient slot.
    pub fn delta_bias(&self) -> ScalarSlot {
        self.params.delta_bias
    }

    /// Accumulated weight gradient slot.
    pub fn delta_weights(&self) -> ArraySlot {
        self.params.delta_weights
    }

    /// Optimizer state.
    pub fn state(&self) -> &OptimizerState {
        &self.params.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurite_arena::ArenaConfig;
    use neurite_core::NetworkId;

    fn arena() -> ParamArena {
        ParamArena::new(ArenaConfig::new(NetworkId(0), 256)).unwrap()
    }

    #[test]
    fn bind_produces_kind_specific_fields() {
        let mut a = arena();
        let n = UnboundNeuron::new(UnitAddr::new(0, 1, 0), 3)
            .bind(&mut a, OptimizerKind::Adam)
            .unwrap();
        assert_eq!(n.fan_in(), 3);
        assert_eq!(n.kind(), OptimizerKind::Adam);
        assert_eq!(n.weights().read(&a), &[0.0; 3]);
        assert_eq!(n.delta_weights().read(&a), &[0.0; 3]);
        assert_eq!(n.state().m().map(|m| m.get(&a)), Some(0.0));
        assert_eq!(n.state().v().map(|v| v.get(&a)), Some(0.0));
        assert!(n.state().bias_gain().is_none());
        assert!(n.state().bias_cache().is_none());
    }

    #[test]
    fn bind_named_unknown_is_plain() {
        let mut a = arena();
        let n = UnboundNeuron::new(UnitAddr::new(0, 1, 0), 2)
            .bind_named(&mut a, "unknown-string")
            .unwrap();
        assert_eq!(n.kind(), OptimizerKind::Plain);
        assert_eq!(*n.state(), OptimizerState::Plain);
    }

    #[test]
    fn two_neurons_do_not_alias() {
        let mut a = arena();
        let n0 = UnboundNeuron::new(UnitAddr::new(0, 1, 0), 2)
            .bind(&mut a, OptimizerKind::RmsProp)
            .unwrap();
        let n1 = UnboundNeuron::new(UnitAddr::new(0, 1, 1), 2)
            .bind(&mut a, OptimizerKind::RmsProp)
            .unwrap();
        n0.bias().set(&mut a, 9.0);
        n0.weights().fill(&mut a, 9.0);
        assert_eq!(n1.bias().get(&a), 0.0);
        assert_eq!(n1.weights().read(&a), &[0.0, 0.0]);
    }

    #[test]
    fn rebinding_same_identity_fails() {
        let mut a = arena();
        let addr = UnitAddr::new(0, 1, 0);
        UnboundNeuron::new(addr, 2)
            .bind(&mut a, OptimizerKind::Plain)
            .unwrap();
        assert!(matches!(
            UnboundNeuron::new(addr, 2).bind(&mut a, OptimizerKind::Plain),
            Err(ArenaError::AlreadyBound { .. })
        ));
    }
}
