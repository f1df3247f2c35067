//! Integration test: whole-network build, layout and parameter operations.

use neurite_arena::ArenaError;
use neurite_core::{FieldRole, NetworkId, OptimizerKind, ParamReader, UnitAddr};
use neurite_network::{BuildError, LayerSpec, Network, NetworkConfig, NetworkRegistry, WeightInit};
use neurite_test_utils::fixtures::{mlp, small_conv, tiny_mlp};
use neurite_test_utils::{copy_fields, MockParamStore};

#[test]
fn every_unit_is_bound_once_in_order() {
    let net = Network::build(NetworkId(0), tiny_mlp(OptimizerKind::AdaDelta)).unwrap();
    let arena = net.arena();

    let mut expected = 0;
    for layer in net.layers().iter().skip(1) {
        for params in layer.unit_params() {
            assert_eq!(params.bias.handle().offset(), expected);
            expected += OptimizerKind::AdaDelta
                .slots_per_unit(layer.fan_in())
                .unwrap();
        }
    }
    assert_eq!(expected as usize, arena.capacity());
    assert_eq!(arena.remaining(), 0);
}

#[test]
fn conv_filters_start_with_unit_gains() {
    let net = Network::build(NetworkId(0), small_conv(OptimizerKind::Gain)).unwrap();
    let conv = net.layer(1).unwrap();
    assert_eq!(conv.filters().len(), 4);
    assert!(conv.neurons().is_empty());

    for filter in conv.filters() {
        assert_eq!(filter.params().fan_in(), 18);
        let gains = filter.params().state.gain().unwrap();
        assert_eq!(gains.bias_gain.get(net.arena()), 1.0);
        assert!(gains.weight_gain.read(net.arena()).iter().all(|&g| g == 1.0));
    }

    // dense neurons keep zeroed gains
    let dense = net.layer(2).unwrap().neurons()[0];
    assert_eq!(dense.fan_in(), 4);
    assert_eq!(dense.state().bias_gain().unwrap().get(net.arena()), 0.0);
}

#[test]
fn invalid_config_builds_nothing() {
    let config = NetworkConfig::new(vec![LayerSpec::Input { size: 3 }]);
    assert!(matches!(
        Network::build(NetworkId(0), config),
        Err(BuildError::Config(_))
    ));
}

#[test]
fn oversized_network_fails_at_planning() {
    let config = mlp(&[u32::MAX, u32::MAX], OptimizerKind::Adam);
    let err = Network::build(NetworkId(0), config).unwrap_err();
    assert!(matches!(err, BuildError::Arena(ArenaError::InvalidConfig { .. })));
}

#[test]
fn engine_can_read_through_the_address_path() {
    let mut net = Network::build(NetworkId(2), tiny_mlp(OptimizerKind::Adam)).unwrap();
    let addr = UnitAddr::new(2, 2, 0);
    let neuron = net.layer(2).unwrap().neurons()[0];
    neuron.weights().fill(net.arena_mut(), 0.5);
    neuron.state().m().unwrap().set(net.arena_mut(), 0.1);

    let mut store = MockParamStore::new();
    store.add_field(addr, FieldRole::Weights, 2);
    store.add_field(addr, FieldRole::M, 1);
    store.add_field(addr, FieldRole::BiasGain, 1);

    let roles = [FieldRole::Weights, FieldRole::M, FieldRole::BiasGain];
    assert_eq!(copy_fields(net.arena(), &mut store, addr, &roles), 2);
    assert_eq!(store.read(addr, FieldRole::Weights), Some(&[0.5, 0.5][..]));
    assert_eq!(store.read(addr, FieldRole::M), Some(&[0.1][..]));
}

#[test]
fn parameters_can_be_loaded_from_another_store() {
    let mut net = Network::build(NetworkId(0), tiny_mlp(OptimizerKind::Plain)).unwrap();
    let addr = UnitAddr::new(0, 1, 1);
    let mut store = MockParamStore::new();
    store.set_field(addr, FieldRole::Bias, vec![-0.2]);
    store.set_field(addr, FieldRole::Weights, vec![1.0, 2.0, 3.0]);

    let n = copy_fields(
        &store,
        net.arena_mut(),
        addr,
        &[FieldRole::Bias, FieldRole::Weights],
    );
    assert_eq!(n, 2);
    let neuron = net.layer(1).unwrap().neurons()[1];
    assert_eq!(neuron.bias().get(net.arena()), -0.2);
    assert_eq!(neuron.weights().read(net.arena()), &[1.0, 2.0, 3.0]);
    // neighbour untouched
    assert!(net.layer(1).unwrap().neurons()[0].params().is_zeroed(net.arena()));
}

#[test]
fn training_cycle_helpers() {
    let config = tiny_mlp(OptimizerKind::RmsProp).with_weight_init(WeightInit::Uniform { limit: 0.5 });
    let mut net = Network::build(NetworkId(0), config).unwrap();
    net.initialize_weights(3);
    net.back_up_validation();
    let snapshot = net.arena().region().to_vec();

    let neuron = net.layer(1).unwrap().neurons()[0];
    neuron.delta_weights().fill(net.arena_mut(), 0.3);
    neuron.weights().fill(net.arena_mut(), 9.0);
    neuron.state().bias_cache().unwrap().set(net.arena_mut(), 0.7);

    net.reset_deltas();
    assert!(net.restore_validation());
    let neuron_cache = neuron.state().bias_cache().unwrap().get(net.arena());
    assert_eq!(neuron_cache, 0.7);
    neuron.state().bias_cache().unwrap().set(net.arena_mut(), 0.0);
    assert_eq!(net.arena().region(), &snapshot[..]);
}

#[test]
fn registry_networks_are_isolated() {
    let mut reg = NetworkRegistry::new();
    let a = reg.create(tiny_mlp(OptimizerKind::Adam)).unwrap();
    let b = reg.create(tiny_mlp(OptimizerKind::Adam)).unwrap();
    assert_ne!(a, b);

    let net_a = reg.get_mut(a).unwrap();
    let neuron = net_a.layer(1).unwrap().neurons()[0];
    neuron.bias().set(net_a.arena_mut(), 5.0);

    let net_b = reg.get(b).unwrap();
    assert!(net_b.arena().region().iter().all(|&v| v == 0.0));
    assert_eq!(
        net_b.arena().read(UnitAddr::new(b.0, 1, 0), FieldRole::Bias),
        Some(&[0.0][..])
    );
    assert_eq!(
        net_b.arena().read(UnitAddr::new(a.0, 1, 0), FieldRole::Bias),
        None
    );
}

#[cfg(not(miri))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_kind() -> impl Strategy<Value = OptimizerKind> {
        proptest::sample::select(OptimizerKind::ALL.to_vec())
    }

    fn arb_sizes() -> impl Strategy<Value = Vec<u32>> {
        prop::collection::vec(1u32..12, 2..5)
    }

    proptest! {
        #[test]
        fn build_fills_region_exactly(sizes in arb_sizes(), kind in arb_kind()) {
            let net = Network::build(NetworkId(0), mlp(&sizes, kind)).unwrap();
            prop_assert_eq!(net.arena().remaining(), 0);
            let units: u32 = sizes[1..].iter().sum();
            prop_assert_eq!(net.unit_count(), units as usize);
            prop_assert_eq!(net.arena().binding_count(), units as usize * kind.roles().len());
        }

        #[test]
        fn fresh_network_is_all_zero(sizes in arb_sizes(), kind in arb_kind()) {
            let net = Network::build(NetworkId(0), mlp(&sizes, kind)).unwrap();
            prop_assert!(net.arena().region().iter().all(|&v| v == 0.0));
        }

        #[test]
        fn layout_is_deterministic(sizes in arb_sizes(), kind in arb_kind(), seed in any::<u64>()) {
            let config = mlp(&sizes, kind).with_weight_init(WeightInit::Xavier);
            let mut a = Network::build(NetworkId(0), config.clone()).unwrap();
            let mut b = Network::build(NetworkId(0), config).unwrap();
            a.initialize_weights(seed);
            b.initialize_weights(seed);
            let la: Vec<_> = a.arena().bindings().iter().collect();
            let lb: Vec<_> = b.arena().bindings().iter().collect();
            prop_assert_eq!(la, lb);
            prop_assert_eq!(a.arena().region(), b.arena().region());
        }

        #[test]
        fn dense_weights_match_previous_layer(sizes in arb_sizes(), kind in arb_kind()) {
            let net = Network::build(NetworkId(0), mlp(&sizes, kind)).unwrap();
            for (l, layer) in net.layers().iter().enumerate().skip(1) {
                for neuron in layer.neurons() {
                    prop_assert_eq!(neuron.weights().len(), sizes[l - 1] as usize);
                    prop_assert_eq!(neuron.delta_weights().len(), sizes[l - 1] as usize);
                }
            }
        }
    }
}
