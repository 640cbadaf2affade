#![allow(dead_code, non_snake_case)]

//! Provides constructs for one-dimensional quantum mechanics in reduced units,
//! centered on explicit time-domain propagation of a Gaussian wave packet
//! through a rectangular potential well.
//!
//! Provides implementations for the following:
//! - Time-dependent:
//!     - Staggered leapfrog integration with fixed boundaries
//!     - Periodic density snapshots replayable by frame index
//! - Time-independent:
//!     - Stationary states by dense diagonalization of a finite-difference
//!       Hamiltonian
//! - Scattering:
//!     - Closed-form transmission coefficient and scattering state of a finite
//!       square well
//!
//! The usual entry point is [`sim::Simulation`], built from a
//! [`sim::Config`]. See [`docs`] for theoretical background.

pub mod error;
pub mod grid;
pub mod packet;
pub mod leapfrog;
pub mod sampler;
pub mod sim;
pub mod stationary;
pub mod transmission;
pub mod utils;

pub mod docs;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
