//! Miscellaneous tools.

use ndarray::{ self as nd, Ix1 };
use num_traits::Float;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let inner = y.slice(nd::s![1..n - 1]).iter()
        .fold(A::zero(), |acc, yk| acc + *yk);
    (dx / two) * (y[0] + two * inner + y[n - 1])
}

/// Pointwise `re² + im²`.
pub fn density<S, T>(re: &nd::ArrayBase<S, Ix1>, im: &nd::ArrayBase<T, Ix1>)
    -> nd::Array1<f64>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    nd::Zip::from(re).and(im)
        .map_collect(|rk, ik| rk.powi(2) + ik.powi(2))
}

/// Total probability `∫ρ dx` of a density array.
///
/// *Panics if `rho` has length less than 2*.
pub fn total_probability<S>(rho: &nd::ArrayBase<S, Ix1>, dx: f64) -> f64
where S: nd::Data<Elem = f64>
{
    trapz(rho, dx)
}

/// Density-weighted mean position `∫x ρ dx / ∫ρ dx`.
///
/// *Panics if the arrays have length less than 2*.
pub fn mean_position<S, T>(x: &nd::ArrayBase<S, Ix1>, rho: &nd::ArrayBase<T, Ix1>)
    -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let xrho: nd::Array1<f64> = nd::Zip::from(x).and(rho)
        .map_collect(|xk, rk| xk * rk);
    xrho.sum() / rho.sum()
}

/// Index of the largest element, ignoring NaNs.
pub fn argmax<S>(a: &nd::ArrayBase<S, Ix1>) -> Option<usize>
where S: nd::Data<Elem = f64>
{
    a.iter().enumerate()
        .filter(|(_, ak)| !ak.is_nan())
        .max_by(|(_, l), (_, r)| l.total_cmp(r))
        .map(|(k, _)| k)
}

/// Set the first and last elements of an array to zero.
pub(crate) fn pin_boundaries<S>(a: &mut nd::ArrayBase<S, Ix1>)
where S: nd::DataMut<Elem = f64>
{
    let n = a.len();
    if n == 0 { return; }
    a[0] = 0.0;
    a[n - 1] = 0.0;
}
