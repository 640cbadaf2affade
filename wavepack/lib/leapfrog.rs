//! Explicit staggered leapfrog integration of the time-dependent Schrödinger
//! equation on a fixed-boundary grid.
//!
//! Writing ψ = R + i I, the real and imaginary parts are advanced alternately,
//! each by a full `dt`, so that at any moment they sit half a step apart in
//! time. On odd steps
//! ```text
//! I[j] ← I[j] + s (R[j + 1] + R[j - 1]) - 2 R[j] (s + V[j] dt)
//! ```
//! and on even steps
//! ```text
//! R[j] ← R[j] - (s (I[j + 1] + I[j - 1]) - 2 I[j] (s + V[j] dt))
//! ```
//! with `s = dt / dx²`, for every interior index `j`. The end points are never
//! touched and stay at zero.
//!
//! See [`docs`][crate::docs#time-dependence] for background.

use ndarray as nd;
use tracing::{ error, trace };
use crate::{
    Arr1,
    error::{ ConfigError, UnstableError },
    packet::WaveState,
};

pub type StepResult<T> = Result<T, UnstableError>;

/// Magnitude above which the state is considered to have diverged.
pub const MAX_AMPLITUDE: f64 = 1e100;

/// Which half of the wavefunction a given step updates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Odd steps update the imaginary part.
    Imag,
    /// Even steps update the real part.
    Real,
}

impl Phase {
    /// Phase of step `i`.
    pub fn of_step(i: usize) -> Self {
        if i % 2 == 1 { Self::Imag } else { Self::Real }
    }
}

/// Stability estimate `2 s + max|V| dt` for the scheme.
///
/// The scheme is bounded when this is at most 1; beyond that some grid mode
/// grows geometrically.
pub fn stability_number<S>(dx: f64, dt: f64, V: &Arr1<S>) -> f64
where S: nd::Data<Elem = f64>
{
    let vmax = V.iter().fold(0.0_f64, |acc, vk| acc.max(vk.abs()));
    2.0 * dt / dx.powi(2) + vmax * dt
}

/// Stepper holding the potential, step sizes, and a scratch buffer for
/// pre-update values.
#[derive(Clone, Debug)]
pub struct Leapfrog<'a> {
    v: nd::ArrayView1<'a, f64>,
    dt: f64,
    s: f64,
    prev: nd::Array1<f64>,
}

impl<'a> Leapfrog<'a> {
    /// Create a new stepper over potential `V`.
    pub fn new<S>(dx: f64, dt: f64, V: &'a Arr1<S>) -> Result<Self, ConfigError>
    where S: nd::Data<Elem = f64>
    {
        ConfigError::check_dx(dx)?;
        ConfigError::check_dt(dt)?;
        let s = dt / dx.powi(2);
        let prev = nd::Array1::zeros(V.len());
        Ok(Self { v: V.view(), dt, s, prev })
    }

    /// Coefficient `s = dt / dx²`.
    pub fn s(&self) -> f64 { self.s }

    /// Time step.
    pub fn dt(&self) -> f64 { self.dt }

    /// Take step `i` (counting from 1) in place, writing the density estimate
    /// for this step into the interior of `rho`.
    ///
    /// On odd steps the density is `R² + I_new I_old`; on even steps it is
    /// `R_new R_old + I²`. The end points of `rho` are left as they are.
    ///
    /// Returns the phase that was applied.
    ///
    /// *Panics if `state` or `rho` do not match the length of the potential*.
    pub fn step(&mut self, i: usize, state: &mut WaveState, rho: &mut nd::Array1<f64>)
        -> StepResult<Phase>
    {
        let s = self.s;
        let dt = self.dt;
        let phase = Phase::of_step(i);
        match phase {
            Phase::Imag => {
                nd::Zip::from(state.im.slice_mut(nd::s![1..-1]))
                    .and(self.prev.slice_mut(nd::s![1..-1]))
                    .and(state.re.windows(3))
                    .and(self.v.slice(nd::s![1..-1]))
                    .and(rho.slice_mut(nd::s![1..-1]))
                    .for_each(|im, prev, re, &vj, rhoj| {
                        *prev = *im;
                        *im += s * (re[2] + re[0]) - 2.0 * re[1] * (s + vj * dt);
                        *rhoj = re[1].powi(2) + *im * *prev;
                    });
                check_finite(i, &state.im)?;
            },
            Phase::Real => {
                nd::Zip::from(state.re.slice_mut(nd::s![1..-1]))
                    .and(self.prev.slice_mut(nd::s![1..-1]))
                    .and(state.im.windows(3))
                    .and(self.v.slice(nd::s![1..-1]))
                    .and(rho.slice_mut(nd::s![1..-1]))
                    .for_each(|re, prev, im, &vj, rhoj| {
                        *prev = *re;
                        *re -= s * (im[2] + im[0]) - 2.0 * im[1] * (s + vj * dt);
                        *rhoj = *re * *prev + im[1].powi(2);
                    });
                check_finite(i, &state.re)?;
            },
        }
        trace!(step = i, ?phase, "leapfrog step");
        Ok(phase)
    }
}

fn check_finite(step: usize, a: &nd::Array1<f64>) -> StepResult<()> {
    match a.iter().position(|ak| !ak.is_finite() || ak.abs() > MAX_AMPLITUDE) {
        Some(index) => {
            let value = a[index];
            error!(step, index, value, "state diverged");
            Err(UnstableError { step, index, value })
        },
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ grid::Grid, packet::Packet, utils::total_probability };

    fn setup(dx: f64) -> (Grid, nd::Array1<f64>, WaveState) {
        let grid = Grid::new(dx, 2.0).unwrap();
        let v = nd::Array1::zeros(grid.len());
        let state = Packet { xc: 1.0, sigma: 0.1, k: 20.0 }.sample(&grid).unwrap();
        (grid, v, state)
    }

    #[test]
    fn phases_alternate() {
        assert_eq!(Phase::of_step(1), Phase::Imag);
        assert_eq!(Phase::of_step(2), Phase::Real);
        assert_eq!(Phase::of_step(3), Phase::Imag);
    }

    #[test]
    fn single_steps_touch_one_part() {
        let (grid, v, mut state) = setup(0.01);
        let initial = state.clone();
        let mut rho = initial.density();
        let mut lf = Leapfrog::new(grid.dx(), 1e-5, &v).unwrap();

        assert_eq!(lf.step(1, &mut state, &mut rho).unwrap(), Phase::Imag);
        assert_eq!(state.re, initial.re);
        assert_ne!(state.im, initial.im);

        let after_imag = state.clone();
        assert_eq!(lf.step(2, &mut state, &mut rho).unwrap(), Phase::Real);
        assert_eq!(state.im, after_imag.im);
        assert_ne!(state.re, after_imag.re);
    }

    #[test]
    fn odd_step_formula() {
        let v = nd::array![0.0, -2.0, 0.0, 0.0];
        let mut state = WaveState {
            re: nd::array![0.0, 1.0, 0.5, 0.0],
            im: nd::array![0.0, 0.25, -0.5, 0.0],
        };
        let mut rho = nd::Array1::zeros(4);
        let (dx, dt) = (0.1, 0.001);
        let s = dt / dx / dx;
        let mut lf = Leapfrog::new(dx, dt, &v).unwrap();
        lf.step(1, &mut state, &mut rho).unwrap();

        let im1 = 0.25 + s * (0.5 + 0.0) - 2.0 * 1.0 * (s - 2.0 * dt);
        let im2 = -0.5 + s * (0.0 + 1.0) - 2.0 * 0.5 * s;
        assert!((state.im[1] - im1).abs() < 1e-14);
        assert!((state.im[2] - im2).abs() < 1e-14);
        assert!((rho[1] - (1.0 + im1 * 0.25)).abs() < 1e-14);
        assert!((rho[2] - (0.25 + im2 * -0.5)).abs() < 1e-14);
        assert_eq!(rho[0], 0.0);
        assert_eq!(rho[3], 0.0);
    }

    #[test]
    fn even_step_formula() {
        let v = nd::array![0.0, 0.0, 3.0, 0.0];
        let mut state = WaveState {
            re: nd::array![0.0, 1.0, 0.5, 0.0],
            im: nd::array![0.0, 0.25, -0.5, 0.0],
        };
        let mut rho = nd::Array1::zeros(4);
        let (dx, dt) = (0.1, 0.001);
        let s = dt / dx / dx;
        let mut lf = Leapfrog::new(dx, dt, &v).unwrap();
        lf.step(2, &mut state, &mut rho).unwrap();

        let re1 = 1.0 - (s * (-0.5 + 0.0) - 2.0 * 0.25 * s);
        let re2 = 0.5 - (s * (0.0 + 0.25) - 2.0 * -0.5 * (s + 3.0 * dt));
        assert!((state.re[1] - re1).abs() < 1e-14);
        assert!((state.re[2] - re2).abs() < 1e-14);
        assert!((rho[1] - (re1 * 1.0 + 0.0625)).abs() < 1e-14);
        assert!((rho[2] - (re2 * 0.5 + 0.25)).abs() < 1e-14);
    }

    #[test]
    fn boundaries_stay_fixed() {
        let (grid, v, mut state) = setup(0.01);
        let mut rho = state.density();
        let mut lf = Leapfrog::new(grid.dx(), 1e-5, &v).unwrap();
        for i in 1..500 {
            lf.step(i, &mut state, &mut rho).unwrap();
            assert!(state.boundaries_fixed());
        }
    }

    #[test]
    fn norm_conserved_short_run() {
        let (grid, v, mut state) = setup(0.01);
        let mut rho = state.density();
        let p0 = total_probability(&rho, grid.dx());
        let mut lf = Leapfrog::new(grid.dx(), 1e-5, &v).unwrap();
        for i in 1..1000 {
            lf.step(i, &mut state, &mut rho).unwrap();
        }
        let p1 = total_probability(&rho, grid.dx());
        assert!((p1 - p0).abs() < 1e-3 * p0);
    }

    #[test]
    fn divergence_detected() {
        let (grid, v, mut state) = setup(0.01);
        let mut rho = state.density();
        // s = 2, far outside the stable region
        let dt = 2.0 * grid.dx().powi(2);
        assert!(stability_number(grid.dx(), dt, &v) > 1.0);
        let mut lf = Leapfrog::new(grid.dx(), dt, &v).unwrap();
        let res: StepResult<()>
            = (1..5000).try_for_each(|i| lf.step(i, &mut state, &mut rho).map(|_| ()));
        let err = res.unwrap_err();
        assert!(err.step > 1);
        assert!((1..grid.len() - 1).contains(&err.index));
    }

    #[test]
    fn stability_number_reference() {
        let v = nd::array![0.0, -4000.0, 0.0];
        let sn = stability_number(0.001, 1e-7, &v);
        assert!((sn - 0.2004).abs() < 1e-12);
    }
}
