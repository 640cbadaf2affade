//! Configuration and driver for a full wave-packet propagation run.
//!
//! ```
//! use wavepack::sim::{ Config, Simulation };
//!
//! let config = Config {
//!     dx: 0.01,
//!     dt: 1e-5,
//!     nt: 200,
//!     cadence: 50,
//!     ..Config::default()
//! };
//! let sim = Simulation::new(config).unwrap();
//! let history = sim.run().unwrap();
//! assert_eq!(history.len(), 5);
//! ```

use std::sync::atomic::{ AtomicBool, Ordering };
use ndarray as nd;
use serde::{ Deserialize, Serialize };
use tracing::{ info, warn };
use crate::{
    error::{ ConfigError, SimError },
    grid::{ Grid, Well },
    leapfrog::{ Leapfrog, stability_number },
    packet::{ Packet, WaveState, wavenumber_from_ratio },
    sampler::{ History, Sampler },
};

pub type SimResult<T> = Result<T, SimError>;

/// Numeric parameters of a run.
///
/// Every field has a default, so partial configurations deserialize cleanly;
/// the defaults describe a packet at `x = 0.6` incident on a well of depth
/// -4000 over `[0.8, 0.9]`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Time step.
    pub dt: f64,
    /// Spatial step.
    pub dx: f64,
    /// Domain length; the grid has `round(length / dx)` points.
    pub length: f64,
    /// Total step count.
    pub nt: usize,
    /// Snapshot interval in steps.
    pub cadence: usize,
    /// Left edge of the well.
    pub well_start: f64,
    /// Right edge of the well.
    pub well_end: f64,
    /// Well depth (negative is attractive).
    pub v0: f64,
    /// Initial packet center.
    pub xc: f64,
    /// Initial packet width.
    pub sigma: f64,
    /// Ratio from which the wavenumber is derived as `√(2 |energy_ratio v0|)`.
    pub energy_ratio: f64,
    /// Explicit wavenumber, overriding `energy_ratio`.
    pub wavenumber: Option<f64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dt: 1e-7,
            dx: 0.001,
            length: 2.0,
            nt: 90000,
            cadence: 1000,
            well_start: 0.8,
            well_end: 0.9,
            v0: -4000.0,
            xc: 0.6,
            sigma: 0.05,
            energy_ratio: 5.0,
            wavenumber: None,
        }
    }
}

impl Config {
    /// Carrier wavenumber of the initial packet.
    pub fn k(&self) -> f64 {
        self.wavenumber
            .unwrap_or_else(|| wavenumber_from_ratio(self.energy_ratio, self.v0))
    }

    /// Well described by this configuration.
    pub fn well(&self) -> Well {
        Well { start: self.well_start, end: self.well_end, v0: self.v0 }
    }

    /// Initial packet described by this configuration.
    pub fn packet(&self) -> Packet {
        Packet { xc: self.xc, sigma: self.sigma, k: self.k() }
    }

    /// Check all scalar parameters that do not depend on the grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_dt(self.dt)?;
        ConfigError::check_dx(self.dx)?;
        ConfigError::check_steps(self.nt)?;
        ConfigError::check_cadence(self.cadence)?;
        ConfigError::check_sigma(self.sigma)?;
        ConfigError::check_finite("energy_ratio", self.energy_ratio)?;
        if let Some(k) = self.wavenumber {
            ConfigError::check_finite("wavenumber", k)?;
        }
        Ok(())
    }
}

/// Everything needed to propagate one packet: grid, potential and initial
/// state, all fixed at construction.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: Config,
    grid: Grid,
    potential: nd::Array1<f64>,
    initial: WaveState,
}

impl Simulation {
    /// Build the grid, potential and initial state for `config`.
    ///
    /// All configuration errors surface here; nothing is stepped.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.dx, config.length)?;
        let potential = config.well().potential(&grid)?;
        let initial = config.packet().sample(&grid)?;
        let sn = stability_number(config.dx, config.dt, &potential);
        if sn > 1.0 {
            warn!(
                stability_number = sn,
                "dt and dx lie outside the stable region of the leapfrog scheme"
            );
        }
        Ok(Self { config, grid, potential, initial })
    }

    /// Configuration this simulation was built from.
    pub fn config(&self) -> &Config { &self.config }

    /// Spatial grid.
    pub fn grid(&self) -> &Grid { &self.grid }

    /// Potential sampled on the grid.
    pub fn potential(&self) -> nd::ArrayView1<'_, f64> { self.potential.view() }

    /// Initial wave state.
    pub fn initial_state(&self) -> &WaveState { &self.initial }

    /// Stability number `2 s + max|V| dt`; the run is bounded when this is at
    /// most 1.
    pub fn stability_number(&self) -> f64 {
        stability_number(self.config.dx, self.config.dt, &self.potential)
    }

    /// Propagate for `nt` steps and return the recorded density history.
    pub fn run(&self) -> SimResult<History> {
        self.run_inner(None)
    }

    /// Like [`Self::run`], but check `cancel` at every step boundary and stop
    /// with [`SimError::Cancelled`] once it is set.
    pub fn run_cancellable(&self, cancel: &AtomicBool) -> SimResult<History> {
        self.run_inner(Some(cancel))
    }

    fn run_inner(&self, cancel: Option<&AtomicBool>) -> SimResult<History> {
        let Config { dx, dt, nt, cadence, .. } = self.config;
        info!(n = self.grid.len(), nt, cadence, dx, dt, "starting propagation");
        let mut state = self.initial.clone();
        let mut rho = state.density();
        let mut sampler = Sampler::new(nt, cadence, self.grid.len())?;
        sampler.record_initial(&rho);
        let mut stepper = Leapfrog::new(dx, dt, &self.potential)?;
        for i in 1..nt {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                warn!(step = i, "propagation cancelled");
                return Err(SimError::Cancelled { step: i });
            }
            stepper.step(i, &mut state, &mut rho)?;
            sampler.observe(i, &rho);
        }
        let history = sampler.finish(&rho);
        info!(frames = history.len(), "propagation finished");
        Ok(history)
    }
}
