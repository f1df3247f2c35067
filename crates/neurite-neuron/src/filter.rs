//! Convolutional filters.
//!
//! A filter is a unit whose weights form a `channels × size × size` volume.
//! It is bound by the same allocator as a neuron, with the volume as its
//! fan-in, so its slots follow the same order and layout rules. The one
//! difference is the gain optimizer: a filter's gains start at `1.0`.

use neurite_arena::{ArenaError, ParamArena};
use neurite_core::{OptimizerKind, UnitAddr};

use crate::params::{allocate_params, UnitParams};
use crate::state::OptimizerState;

/// Shape of a filter's weight volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FilterShape {
    /// Input channels (depth of the volume).
    pub channels: u32,
    /// Spatial width and height of the kernel.
    pub size: u32,
}

impl FilterShape {
    /// A `channels × size × size` kernel.
    pub fn new(channels: u32, size: u32) -> Self {
        Self { channels, size }
    }

    /// Number of weights, or `None` if it overflows `u32`.
    pub fn volume(&self) -> Option<u32> {
        self.size
            .checked_mul(self.size)
            .and_then(|area| area.checked_mul(self.channels))
    }

    /// Flat index of weight `(channel, y, x)`, channel-major.
    pub fn index(&self, channel: u32, y: u32, x: u32) -> Option<usize> {
        if channel >= self.channels || y >= self.size || x >= self.size {
            return None;
        }
        let size = self.size as usize;
        Some((channel as usize * size + y as usize) * size + x as usize)
    }
}

/// A convolutional filter bound into its network's region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Filter {
    addr: UnitAddr,
    shape: FilterShape,
    params: UnitParams,
}

impl Filter {
    /// Bind a filter of `shape` at `addr` for `kind`.
    ///
    /// # Errors
    ///
    /// [`ArenaError::InvalidConfig`] if the volume overflows `u32`; any error
    /// from the region otherwise.
    pub fn bind(
        arena: &mut ParamArena,
        addr: UnitAddr,
        shape: FilterShape,
        kind: OptimizerKind,
    ) -> Result<Self, ArenaError> {
        let volume = shape.volume().ok_or_else(|| ArenaError::InvalidConfig {
            reason: format!(
                "filter volume {}x{}x{} overflows u32",
                shape.channels, shape.size, shape.size
            ),
        })?;
        let params = allocate_params(arena, addr, volume, kind)?;
        if let OptimizerState::Gain(gain) = params.state {
            gain.bias_gain.set(arena, 1.0);
            gain.weight_gain.fill(arena, 1.0);
        }
        Ok(Self {
            addr,
            shape,
            params,
        })
    }

    /// Address of the filter.
    pub fn addr(&self) -> UnitAddr {
        self.addr
    }

    /// Shape of the weight volume.
    pub fn shape(&self) -> FilterShape {
        self.shape
    }

    /// All bound fields.
    pub fn params(&self) -> &UnitParams {
        &self.params
    }

    /// Optimizer the filter was bound for.
    pub fn kind(&self) -> OptimizerKind {
        self.params.kind()
    }

    /// Weight at `(channel, y, x)`.
    pub fn weight(&self, arena: &ParamArena, channel: u32, y: u32, x: u32) -> Option<f64> {
        let i = self.shape.index(channel, y, x)?;
        self.params.weights.get(arena, i)
    }

    /// Overwrite the weight at `(channel, y, x)`. Returns `false` if out of
    /// range.
    pub fn set_weight(
        &self,
        arena: &mut ParamArena,
        channel: u32,
        y: u32,
        x: u32,
        value: f64,
    ) -> bool {
        match self.shape.index(channel, y, x) {
            Some(i) => self.params.weights.set(arena, i, value),
            None => false,
        }
    }
}
