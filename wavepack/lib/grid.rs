//! Uniform spatial grid and the rectangular-well potential sampled on it.

use ndarray as nd;
use crate::error::ConfigError;

pub type GridResult<T> = Result<T, ConfigError>;

/// Uniformly spaced coordinates over `[0, (N - 1) dx]`.
#[derive(Clone, Debug)]
pub struct Grid {
    x: nd::Array1<f64>,
    dx: f64,
}

impl Grid {
    /// Construct a grid of `N = round(length / dx)` points.
    ///
    /// Fails if `dx` is not positive or if fewer than three points would
    /// result.
    pub fn new(dx: f64, length: f64) -> GridResult<Self> {
        ConfigError::check_dx(dx)?;
        ConfigError::check_finite("length", length)?;
        let n = (length / dx).round().max(0.0) as usize;
        if n < 3 { return Err(ConfigError::GridTooSmall { length, dx, n }); }
        let x = nd::Array1::linspace(0.0, (n - 1) as f64 * dx, n);
        Ok(Self { x, dx })
    }

    /// Grid spacing.
    pub fn dx(&self) -> f64 { self.dx }

    /// Number of points.
    pub fn len(&self) -> usize { self.x.len() }

    /// Always `false`; a grid has at least three points.
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Right-hand edge of the domain.
    pub fn x_max(&self) -> f64 { self.x[self.x.len() - 1] }

    /// Coordinate array.
    pub fn x(&self) -> nd::ArrayView1<'_, f64> { self.x.view() }

    /// Index of the grid point nearest to `x`, clamped to the grid.
    pub fn nearest(&self, x: f64) -> usize {
        let k = (x / self.dx).round();
        (k.max(0.0) as usize).min(self.x.len() - 1)
    }
}

/// A single rectangular well of depth `v0` (negative is attractive) spanning
/// the closed interval `[start, end]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Well {
    pub start: f64,
    pub end: f64,
    pub v0: f64,
}

impl Well {
    /// Check that the well is well-formed and lies within `grid`.
    pub fn validate(&self, grid: &Grid) -> GridResult<()> {
        ConfigError::check_finite("well_start", self.start)?;
        ConfigError::check_finite("well_end", self.end)?;
        ConfigError::check_finite("v0", self.v0)?;
        if self.start >= self.end {
            return Err(ConfigError::InvertedWell(self.start, self.end));
        }
        let x_max = grid.x_max();
        for bound in [self.start, self.end] {
            if !(0.0..=x_max).contains(&bound) {
                return Err(ConfigError::WellOutsideGrid { bound, x_max });
            }
        }
        Ok(())
    }

    /// Returns `true` if `x` lies inside the well, edges included.
    pub fn contains(&self, x: f64) -> bool {
        (self.start..=self.end).contains(&x)
    }

    /// Sample the potential over `grid`.
    pub fn potential(&self, grid: &Grid) -> GridResult<nd::Array1<f64>> {
        self.validate(grid)?;
        let v0 = self.v0;
        Ok(grid.x().mapv(|xk| if self.contains(xk) { v0 } else { 0.0 }))
    }
}
