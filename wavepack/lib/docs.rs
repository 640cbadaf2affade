//! Theoretical background.
//!
//! # Contents
//! - [Units](#units)
//! - [Time dependence](#time-dependence)
//! - [Stationary states](#stationary-states)
//! - [Scattering](#scattering)
//!
//! # Units
//! Everything in this crate works in reduced units with *ħ* = *m* = 1. Lengths,
//! energies and times are therefore plain numbers, and the time-dependent
//! Schrödinger equation (TDSE) for a conservative potential reads
//! ```text
//!   ∂ψ      1 ∂²ψ
//! i -- = - --- --- + V(x) ψ
//!   ∂t      2 ∂x²
//! ```
//! The wavenumber of the initial packet is set from a ratio *e* between the
//! packet's energy and the well depth *v*₀ as *k* = √(2 |*e* *v*₀|). Only the
//! magnitude enters; no signed energy is implied.
//!
//! # Time dependence
//! Writing the wavefunction as ψ = *R* + *i* *I*, the TDSE splits into a pair
//! of coupled real equations
//! ```text
//! ∂R         ∂I
//! -- = H I,  -- = -H R
//! ∂t         ∂t
//! ```
//! which have the same structure as position and momentum in a classical
//! oscillator. The leapfrog (or Visscher) scheme exploits this by holding *R*
//! and *I* at time levels offset by half a step and advancing each in turn
//! with a three-point Laplacian. With *s* = *δt* / *δx*², one full cycle is
//! ```text
//! I[j] ← I[j] + s (R[j + 1] + R[j - 1]) - 2 R[j] (s + V[j] δt)
//! R[j] ← R[j] - (s (I[j + 1] + I[j - 1]) - 2 I[j] (s + V[j] δt))
//! ```
//! Each update is explicit and touches only nearest neighbors, so one step is
//! *O*(*N*) and trivially vectorized. The end points are held at zero; the
//! packet is assumed never to reach them.
//!
//! Because *R* and *I* never coexist at the same instant, the naive density
//! *R*² + *I*² is not the quantity the scheme conserves. Instead, after an
//! update of *I*,
//! ```text
//! ρ[j] = R[j]² + I_new[j] I_old[j]
//! ```
//! is used, i.e. the product of *I* at the two surrounding half-steps stands in
//! for *I*². Its sum over the grid stays constant for stable step sizes. After
//! an update of *R* the same construction with the roles exchanged is used.
//!
//! The scheme is only conditionally stable. For a Laplacian whose spectrum
//! reaches 4/*δx*² and a potential bounded by max|*V*|, all modes stay bounded
//! when
//! ```text
//! 2 s + max|V| δt ≤ 1
//! ```
//! Past this bound the shortest-wavelength modes grow geometrically from
//! round-off and swamp the solution within a few hundred steps; there is no
//! way to recover, so the integrator stops with an error as soon as any value
//! becomes non-finite or runs away.
//!
//! # Stationary states
//! Replacing the second derivative by the same three-point stencil turns the
//! time-independent equation into a symmetric tridiagonal eigenproblem
//! ```text
//! H = -½ (I{-1} - 2 I{0} + I{+1}) / δx² + diag(V)
//! ```
//! where *I*{*k*} is the *N*×*N* matrix with ones on the *k*-th diagonal. The
//! wavefunction is implicitly zero one grid step beyond either end. With no
//! potential the eigenvalues are known exactly,
//! ```text
//! E[n] = (2 / δx²) sin²(n π / 2 (N + 1)),  n = 1, ..., N
//! ```
//! which makes a convenient check. Eigenvectors are normalized so that
//! Σ ψ² δx = 1.
//!
//! # Scattering
//! For a square well of depth *v*₀ over |*x*| ≤ *a*, the wavefunction is a sum
//! of plane waves in each of the three regions, with wavenumber *k* = √(2 *E*)
//! outside and *q* = √(2 (*E* + *v*₀)) inside. Imposing continuity of ψ and
//! ψ' at *x* = ±*a* with unit incoming amplitude fixes the remaining four
//! amplitudes, and the transmission coefficient is the squared modulus of the
//! outgoing one. It agrees with the textbook form
//! ```text
//!           v₀² sin²(2 q a)  ⁻¹
//! T = (1 + ---------------)
//!          4 E (E + v₀)
//! ```
//! and reaches unity whenever 2 *q* *a* is a multiple of *π*.
