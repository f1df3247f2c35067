//! Table of live networks.

use neurite_core::NetworkId;

use crate::config::NetworkConfig;
use crate::error::BuildError;
use crate::network::Network;

/// Owns every live network and hands out their ids.
///
/// `NetworkId(n)` is slot `n` of the table. Removing a network frees its
/// slot for reuse by the next [`create`](Self::create).
#[derive(Debug, Default)]
pub struct NetworkRegistry {
    instances: Vec<Option<Network>>,
}

impl NetworkRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network in the lowest free slot and return its id.
    ///
    /// On error the slot stays free.
    pub fn create(&mut self, config: NetworkConfig) -> Result<NetworkId, BuildError> {
        let slot = self
            .instances
            .iter()
            .position(Option::is_none)
            .unwrap_or(self.instances.len());
        let id = NetworkId(slot as u32);
        let network = Network::build(id, config)?;
        if slot == self.instances.len() {
            self.instances.push(Some(network));
        } else {
            self.instances[slot] = Some(network);
        }
        Ok(id)
    }

    /// Look up a live network.
    pub fn get(&self, id: NetworkId) -> Option<&Network> {
        self.instances.get(id.0 as usize)?.as_ref()
    }

    /// Look up a live network mutably.
    pub fn get_mut(&mut self, id: NetworkId) -> Option<&mut Network> {
        self.instances.get_mut(id.0 as usize)?.as_mut()
    }

    /// Remove a network, returning it. Its region is released when the
    /// returned value is dropped.
    pub fn remove(&mut self, id: NetworkId) -> Option<Network> {
        let network = self.instances.get_mut(id.0 as usize)?.take();
        if network.is_some() {
            tracing::debug!(network = %id, "network removed");
        }
        network
    }

    /// Drop every network.
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Number of live networks.
    pub fn len(&self) -> usize {
        self.instances.iter().filter(|n| n.is_some()).count()
    }

    /// Whether no network is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids of live networks, ascending.
    pub fn ids(&self) -> impl Iterator<Item = NetworkId> + '_ {
        self.instances
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_some())
            .map(|(i, _)| NetworkId(i as u32))
    }
}
