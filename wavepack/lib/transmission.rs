//! Closed-form scattering off a finite square well of depth `v0` occupying
//! `|x| ≤ a`, in reduced units (ħ = m = 1).
//!
//! For incident energy `E > 0` the wavenumbers outside and inside the well are
//! ```text
//! k = √(2 E)
//! q = √(2 (E + v0))
//! ```
//! and the stationary scattering state with unit incoming amplitude is
//! ```text
//!        ⎧ exp(i k x) + B₁ exp(-i k x)     x < -a
//! ψ(x) = ⎨ A₂ exp(i q x) + B₂ exp(-i q x)  |x| ≤ a
//!        ⎩ A₃ exp(i k x)                   x > a
//! ```
//! with amplitudes fixed by continuity of ψ and ψ' at `x = ±a`. The
//! transmission coefficient is `T = |A₃|²`.
//!
//! ```
//! use wavepack::transmission::transmission;
//!
//! let t = transmission(0.5, 10.0, 1.0).unwrap();
//! assert!((t - 0.76113159946499).abs() < 1e-10);
//! ```

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{ Arr1, error::ScatterError };

pub type ScatterResult<T> = Result<T, ScatterError>;

/// Amplitudes of the scattering state for unit incoming amplitude.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coefficients {
    /// Wavenumber outside the well.
    pub k: f64,
    /// Wavenumber inside the well.
    pub q: f64,
    /// Reflected amplitude, left of the well.
    pub b1: C64,
    /// Right-moving amplitude inside the well.
    pub a2: C64,
    /// Left-moving amplitude inside the well.
    pub b2: C64,
    /// Transmitted amplitude, right of the well.
    pub a3: C64,
    /// Well half-width.
    pub a: f64,
}

impl Coefficients {
    /// Match amplitudes at both edges of the well.
    pub fn new(e: f64, v0: f64, a: f64) -> ScatterResult<Self> {
        ScatterError::check(e, v0, a)?;
        let k = (2.0 * e).sqrt();
        let q = (2.0 * (e + v0)).sqrt();
        let i = C64::i();
        // ratio A₃ exp(ika) / A₂ exp(iqa) from matching at x = +a
        let t = C64::from(2.0 * q / (k + q));
        let denom
            = i * q * (C64::cis(-q * a) - C64::cis(3.0 * q * a) * (t - 1.0))
            + i * k * (C64::cis(-q * a) + C64::cis(3.0 * q * a) * (t - 1.0));
        let a2 = 2.0 * i * k * C64::cis(-k * a) / denom;
        let b2 = (t - 1.0) * a2 * C64::cis(2.0 * q * a);
        let a3 = t * a2 * C64::cis((q - k) * a);
        let b1
            = (a2 * C64::cis(-q * a) + b2 * C64::cis(q * a) - C64::cis(-k * a))
            * C64::cis(-k * a);
        Ok(Self { k, q, b1, a2, b2, a3, a })
    }

    /// Transmission coefficient `|A₃|²`.
    pub fn transmission(&self) -> f64 { self.a3.norm_sqr() }

    /// Reflection coefficient `|B₁|²`.
    pub fn reflection(&self) -> f64 { self.b1.norm_sqr() }

    /// Evaluate the scattering state at `x`.
    pub fn psi(&self, x: f64) -> C64 {
        let Self { k, q, b1, a2, b2, a3, a } = *self;
        if x < -a {
            C64::cis(k * x) + b1 * C64::cis(-k * x)
        } else if x <= a {
            a2 * C64::cis(q * x) + b2 * C64::cis(-q * x)
        } else {
            a3 * C64::cis(k * x)
        }
    }
}

/// Transmission coefficient for a particle of energy `e` incident on a well of
/// depth `v0` and half-width `a`.
pub fn transmission(e: f64, v0: f64, a: f64) -> ScatterResult<f64> {
    Coefficients::new(e, v0, a).map(|coeffs| coeffs.transmission())
}

/// Compute [`transmission`] for each of a series of energies.
pub fn transmission_curve<S>(energies: &Arr1<S>, v0: f64, a: f64)
    -> ScatterResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    energies.iter()
        .map(|&e| transmission(e, v0, a))
        .collect()
}

/// Sample the scattering state at energy `e` over coordinates `x`.
pub fn scattering_state<S>(x: &Arr1<S>, e: f64, v0: f64, a: f64)
    -> ScatterResult<nd::Array1<C64>>
where S: nd::Data<Elem = f64>
{
    let coeffs = Coefficients::new(e, v0, a)?;
    Ok(x.mapv(|xk| coeffs.psi(xk)))
}
