//! Stationary states of the one-dimensional, time-independent Schrödinger
//! equation (TISE) by direct diagonalization of a finite-difference
//! Hamiltonian.
//!
//! Units are reduced (ħ = m = 1), so that
//! ```text
//! H = -½ ∂²/∂x² + V(x)
//! ```
//! with the second derivative replaced by the three-point stencil
//! `(f[i + 1] - 2 f[i] + f[i - 1]) / δx²` and the wavefunction taken to vanish
//! just outside the grid.

use std::cmp;
use nalgebra as na;
use ndarray as nd;
use tracing::debug;
use crate::{ Arr1, error::XError };

pub type XResult<T> = Result<T, XError>;

/// A single solution to the TISE.
///
/// This struct is usually only returned by [`solve_eigh`]; you probably won't
/// ever instantiate it yourself.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Energy
    pub e: f64,
    /// Wavefunction, normalized so that `Σ ψ² δx = 1`
    pub wf: nd::Array1<f64>,
}

impl Solution {
    /// Compare two `Solution`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }

    /// Probability density `ψ²`.
    pub fn density(&self) -> nd::Array1<f64> { self.wf.mapv(|qk| qk * qk) }
}

/// Finite square well centered on `x = 0`: `-depth` where `|x| ≤ width / 2`,
/// zero elsewhere.
pub fn square_well<S>(x: &Arr1<S>, depth: f64, width: f64) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    x.mapv(|xk| if xk.abs() <= width / 2.0 { -depth } else { 0.0 })
}

/// Build the dense Hamiltonian matrix for potential `V` sampled at spacing
/// `dx`.
pub fn hamiltonian<S>(dx: f64, V: &Arr1<S>) -> XResult<na::DMatrix<f64>>
where S: nd::Data<Elem = f64>
{
    XError::check_dx(dx)?;
    XError::check_grid(V.len())?;
    let n = V.len();
    let t = 0.5 / dx.powi(2);
    let H = na::DMatrix::from_fn(n, n, |i, j| {
        if i == j {
            2.0 * t + V[i]
        } else if i.abs_diff(j) == 1 {
            -t
        } else {
            0.0
        }
    });
    Ok(H)
}

// fix the overall sign so that the first appreciable lobe is positive
fn fix_sign(wf: &mut nd::Array1<f64>) {
    let max = wf.iter().fold(0.0_f64, |acc, qk| acc.max(qk.abs()));
    if let Some(first) = wf.iter().find(|qk| qk.abs() > 1e-3 * max) {
        if *first < 0.0 { wf.map_inplace(|qk| { *qk = -*qk; }); }
    }
}

/// Find the `nstates` lowest-energy solutions for potential `V`, in order of
/// ascending energy.
pub fn solve_eigh<S>(dx: f64, V: &Arr1<S>, nstates: usize)
    -> XResult<Vec<Solution>>
where S: nd::Data<Elem = f64>
{
    XError::check_states(nstates, V.len())?;
    let H = hamiltonian(dx, V)?;
    let eig = H.symmetric_eigen();
    let mut order: Vec<usize> = (0..eig.eigenvalues.len()).collect();
    order.sort_by(|&l, &r| eig.eigenvalues[l].total_cmp(&eig.eigenvalues[r]));
    let sols: Vec<Solution>
        = order.into_iter().take(nstates)
        .map(|k| {
            let mut wf: nd::Array1<f64>
                = eig.eigenvectors.column(k).iter().copied().collect();
            let norm = (wf.mapv(|qk| qk * qk).sum() * dx).sqrt();
            wf /= norm;
            fix_sign(&mut wf);
            Solution { e: eig.eigenvalues[k], wf }
        })
        .collect();
    debug!(n = V.len(), nstates, e0 = sols[0].e, "diagonalized hamiltonian");
    Ok(sols)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use super::*;

    #[test]
    fn hamiltonian_structure() {
        let V = nd::array![1.0, 2.0, 3.0, 4.0];
        let H = hamiltonian(0.5, &V).unwrap();
        assert_eq!(H.shape(), (4, 4));
        assert_eq!(H[(0, 0)], 4.0 + 1.0);
        assert_eq!(H[(2, 2)], 4.0 + 3.0);
        assert_eq!(H[(1, 2)], -2.0);
        assert_eq!(H[(2, 1)], -2.0);
        assert_eq!(H[(0, 3)], 0.0);
    }

    #[test]
    fn free_box_spectrum() {
        let n = 100;
        let dx = 0.1;
        let V: nd::Array1<f64> = nd::Array1::zeros(n);
        let sols = solve_eigh(dx, &V, 5).unwrap();
        for (m, sol) in sols.iter().enumerate() {
            let arg = (m + 1) as f64 * PI / (2.0 * (n + 1) as f64);
            let expected = 2.0 / dx.powi(2) * arg.sin().powi(2);
            assert!((sol.e - expected).abs() < 1e-8, "{m}: {} vs {expected}", sol.e);
        }
    }

    #[test]
    fn orthonormal_and_sorted() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-50.0, 50.0, 201);
        let dx = x[1] - x[0];
        let V = square_well(&x, 50.0, 20.0);
        let sols = solve_eigh(dx, &V, 6).unwrap();
        for w in sols.windows(2) {
            assert_eq!(w[0].cmp_energy(&w[1]), Some(cmp::Ordering::Less));
        }
        for (i, si) in sols.iter().enumerate() {
            for (j, sj) in sols.iter().enumerate() {
                let dot = (&si.wf * &sj.wf).sum() * dx;
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((dot - expected).abs() < 1e-8);
            }
        }
    }

    #[test]
    fn square_well_ground_state() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-50.0, 50.0, 201);
        let dx = x[1] - x[0];
        let V = square_well(&x, 50.0, 20.0);
        assert_eq!(V[100], -50.0);
        assert_eq!(V[0], 0.0);
        let sols = solve_eigh(dx, &V, 1).unwrap();
        let ground = &sols[0];
        assert!(ground.e > -50.0 && ground.e < -49.9);
        // even parity and a positive single lobe
        let n = ground.wf.len();
        assert!(ground.wf[n / 2] > 0.0);
        for k in 0..n {
            assert!((ground.wf[k] - ground.wf[n - 1 - k]).abs() < 1e-8);
        }
        let rho = ground.density();
        assert!((rho.sum() * dx - 1.0).abs() < 1e-10);
    }

    #[test]
    fn bad_inputs() {
        let V: nd::Array1<f64> = nd::Array1::zeros(10);
        assert!(matches!(solve_eigh(0.1, &V, 0), Err(XError::BadStateCount(0, 10))));
        assert!(matches!(solve_eigh(0.1, &V, 11), Err(XError::BadStateCount(11, 10))));
        assert!(matches!(solve_eigh(0.0, &V, 1), Err(XError::BadDx(_))));
        let short = nd::array![0.0, 0.0];
        assert!(matches!(hamiltonian(0.1, &short), Err(XError::GridTooSmall(2))));
    }
}
