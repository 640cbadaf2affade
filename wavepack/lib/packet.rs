//! Initial Gaussian wave packet and the split real/imaginary wave state.
//!
//! The state is deliberately kept as two real arrays rather than one complex
//! array: under the leapfrog scheme the two parts live at time levels offset
//! by half a step.

use std::f64::consts::PI;
use ndarray as nd;
use tracing::debug;
use crate::{
    error::ConfigError,
    grid::Grid,
    utils::{ density, pin_boundaries },
};

pub type PacketResult<T> = Result<T, ConfigError>;

/// Wavenumber associated with a ratio of packet energy to well depth.
///
/// Only the magnitude of `energy_ratio * v0` is used: `k = √(2 |e v0|)`.
pub fn wavenumber_from_ratio(energy_ratio: f64, v0: f64) -> f64 {
    (2.0 * (energy_ratio * v0).abs()).sqrt()
}

/// Parameters of a modulated Gaussian
/// ```text
/// ψ(x) = A exp(i k x) exp(-(x - xc)² / 2σ²)
/// A = 1 / √(σ √π)
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Packet {
    /// Center.
    pub xc: f64,
    /// Width.
    pub sigma: f64,
    /// Carrier wavenumber.
    pub k: f64,
}

impl Packet {
    /// Normalization constant `A`.
    pub fn amplitude(&self) -> f64 {
        (self.sigma * PI.sqrt()).sqrt().recip()
    }

    /// Sample the packet over `grid`.
    ///
    /// The end points are set to zero so that the returned state satisfies
    /// the fixed boundary condition from the outset.
    pub fn sample(&self, grid: &Grid) -> PacketResult<WaveState> {
        ConfigError::check_sigma(self.sigma)?;
        ConfigError::check_finite("xc", self.xc)?;
        ConfigError::check_finite("k", self.k)?;
        let a = self.amplitude();
        let two_sig2 = 2.0 * self.sigma.powi(2);
        let envelope = grid.x().mapv(|xk| a * (-(xk - self.xc).powi(2) / two_sig2).exp());
        let mut re = nd::Zip::from(&envelope).and(grid.x())
            .map_collect(|ek, xk| ek * (self.k * xk).cos());
        let mut im = nd::Zip::from(&envelope).and(grid.x())
            .map_collect(|ek, xk| ek * (self.k * xk).sin());
        pin_boundaries(&mut re);
        pin_boundaries(&mut im);
        debug!(xc = self.xc, sigma = self.sigma, k = self.k, n = grid.len(), "sampled wave packet");
        Ok(WaveState { re, im })
    }
}

/// Discretized wavefunction as separate real and imaginary parts.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveState {
    pub(crate) re: nd::Array1<f64>,
    pub(crate) im: nd::Array1<f64>,
}

impl WaveState {
    /// Number of grid points.
    pub fn len(&self) -> usize { self.re.len() }

    /// Returns `true` if the state holds no points.
    pub fn is_empty(&self) -> bool { self.re.is_empty() }

    /// Real part.
    pub fn re(&self) -> nd::ArrayView1<'_, f64> { self.re.view() }

    /// Imaginary part.
    pub fn im(&self) -> nd::ArrayView1<'_, f64> { self.im.view() }

    /// Pointwise `re² + im²` with both parts taken as they currently stand.
    pub fn density(&self) -> nd::Array1<f64> { density(&self.re, &self.im) }

    /// Returns `true` if all four end values are exactly zero.
    pub fn boundaries_fixed(&self) -> bool {
        let n = self.len();
        self.re[0] == 0.0 && self.re[n - 1] == 0.0
            && self.im[0] == 0.0 && self.im[n - 1] == 0.0
    }
}
