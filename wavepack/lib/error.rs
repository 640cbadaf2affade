//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;

/// Returned during setup of a propagation run when a parameter is invalid.
///
/// These are only ever produced before the first step is taken.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when a parameter that must be finite is NaN or infinite.
    #[error("parameter `{0}` must be finite; got {1}")]
    NonFinite(&'static str, f64),

    /// Returned when a non-positive spatial step is encountered.
    #[error("spatial step must be greater than 0; got {0}")]
    BadDx(f64),

    /// Returned when a non-positive time step is encountered.
    #[error("time step must be greater than 0; got {0}")]
    BadDt(f64),

    /// Returned when a zero step count is encountered.
    #[error("step count must be greater than 0")]
    BadSteps,

    /// Returned when a zero snapshot cadence is encountered.
    #[error("snapshot cadence must be greater than 0")]
    BadCadence,

    /// Returned when the grid would have fewer than three points, leaving no
    /// interior to update.
    #[error("grid must have at least 3 points; length {length} at spacing {dx} gives {n}")]
    GridTooSmall { length: f64, dx: f64, n: usize },

    /// Returned when the well's bounds are not strictly increasing.
    #[error("well bounds must satisfy start < end; got [{0}, {1}]")]
    InvertedWell(f64, f64),

    /// Returned when a well bound lies outside the grid.
    #[error("well bound {bound} lies outside the grid [0, {x_max}]")]
    WellOutsideGrid { bound: f64, x_max: f64 },

    /// Returned when a non-positive packet width is encountered.
    #[error("packet width must be greater than 0; got {0}")]
    BadSigma(f64),
}

impl ConfigError {
    pub(crate) fn check_finite(name: &'static str, val: f64)
        -> Result<(), Self>
    {
        val.is_finite().then_some(()).ok_or(Self::NonFinite(name, val))
    }

    pub(crate) fn check_dx(dx: f64) -> Result<(), Self> {
        Self::check_finite("dx", dx)?;
        (dx > 0.0).then_some(()).ok_or(Self::BadDx(dx))
    }

    pub(crate) fn check_dt(dt: f64) -> Result<(), Self> {
        Self::check_finite("dt", dt)?;
        (dt > 0.0).then_some(()).ok_or(Self::BadDt(dt))
    }

    pub(crate) fn check_steps(nt: usize) -> Result<(), Self> {
        (nt != 0).then_some(()).ok_or(Self::BadSteps)
    }

    pub(crate) fn check_cadence(cadence: usize) -> Result<(), Self> {
        (cadence != 0).then_some(()).ok_or(Self::BadCadence)
    }

    pub(crate) fn check_sigma(sigma: f64) -> Result<(), Self> {
        Self::check_finite("sigma", sigma)?;
        (sigma > 0.0).then_some(()).ok_or(Self::BadSigma(sigma))
    }
}

/// Returned by the leapfrog integrator when the state has diverged.
///
/// The scheme is only conditionally stable and does not recover once
/// divergent, so this is always fatal to the run.
#[derive(Debug, Error)]
#[error("numerical instability at step {step}: non-finite or runaway amplitude {value} at grid index {index}")]
pub struct UnstableError {
    /// Step index at which the divergence was detected.
    pub step: usize,
    /// First offending grid index.
    pub index: usize,
    /// Offending value.
    pub value: f64,
}

/// Returned when a frame outside a recorded history is requested.
#[derive(Debug, Error)]
#[error("frame index {0} out of range for history of length {1}")]
pub struct FrameError(pub usize, pub usize);

impl FrameError {
    pub(crate) fn check(frame: usize, len: usize) -> Result<(), Self> {
        (frame < len).then_some(()).ok_or(Self(frame, len))
    }
}

/// Returned from a full propagation run.
#[derive(Debug, Error)]
pub enum SimError {
    /// [`ConfigError`]
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// [`UnstableError`]
    #[error("{0}")]
    Unstable(#[from] UnstableError),

    /// Returned when a run is cancelled from outside before completing.
    #[error("run cancelled before step {step}")]
    Cancelled { step: usize },
}

/// Returned from stationary-state solver functions.
#[derive(Debug, Error)]
pub enum XError {
    /// Returned when a potential array is too short to carry a
    /// finite-difference Laplacian.
    #[error("potential must have at least 3 points; got {0}")]
    GridTooSmall(usize),

    /// Returned when the requested number of states is zero or exceeds the
    /// grid size.
    #[error("number of states must be in 1..={1}; got {0}")]
    BadStateCount(usize, usize),

    /// Returned when a non-positive spatial step is encountered.
    #[error("spatial step must be greater than 0; got {0}")]
    BadDx(f64),
}

impl XError {
    pub(crate) fn check_grid(n: usize) -> Result<(), Self> {
        (n >= 3).then_some(()).ok_or(Self::GridTooSmall(n))
    }

    pub(crate) fn check_states(nstates: usize, n: usize) -> Result<(), Self> {
        (1..=n).contains(&nstates).then_some(())
            .ok_or(Self::BadStateCount(nstates, n))
    }

    pub(crate) fn check_dx(dx: f64) -> Result<(), Self> {
        (dx > 0.0 && dx.is_finite()).then_some(()).ok_or(Self::BadDx(dx))
    }
}

/// Returned from closed-form scattering functions.
#[derive(Debug, Error)]
pub enum ScatterError {
    /// Returned when a non-positive incident energy is encountered.
    #[error("incident energy must be greater than 0; got {0}")]
    BadEnergy(f64),

    /// Returned when a negative well depth is encountered.
    #[error("well depth must be non-negative; got {0}")]
    BadDepth(f64),

    /// Returned when a non-positive well half-width is encountered.
    #[error("well half-width must be greater than 0; got {0}")]
    BadHalfWidth(f64),
}

impl ScatterError {
    pub(crate) fn check(e: f64, v0: f64, a: f64) -> Result<(), Self> {
        (e > 0.0).then_some(()).ok_or(Self::BadEnergy(e))?;
        (v0 >= 0.0).then_some(()).ok_or(Self::BadDepth(v0))?;
        (a > 0.0).then_some(()).ok_or(Self::BadHalfWidth(a))
    }
}
