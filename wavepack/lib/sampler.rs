//! Periodic recording of the probability density into a replayable history.

use ndarray as nd;
use tracing::{ debug, trace };
use crate::error::{ ConfigError, FrameError };

pub type FrameResult<T> = Result<T, FrameError>;

/// Number of frames recorded for a run of `nt` steps at the given cadence,
/// `⌊nt / cadence⌋ + 1`.
///
/// *Panics if `cadence` is zero*.
pub fn frame_count(nt: usize, cadence: usize) -> usize { nt / cadence + 1 }

/// Records a density snapshot at step 0 and after every step `i` with
/// `(i - 1) % cadence == 0`, up to a fixed number of frames.
#[derive(Clone, Debug)]
pub struct Sampler {
    cadence: usize,
    frames: nd::Array2<f64>,
    filled: usize,
}

impl Sampler {
    /// Create a new sampler for `nt` steps over `n` grid points.
    pub fn new(nt: usize, cadence: usize, n: usize) -> Result<Self, ConfigError> {
        ConfigError::check_steps(nt)?;
        ConfigError::check_cadence(cadence)?;
        let frames = nd::Array2::zeros((frame_count(nt, cadence), n));
        Ok(Self { cadence, frames, filled: 0 })
    }

    /// Total number of frames this sampler will hold.
    pub fn capacity(&self) -> usize { self.frames.nrows() }

    /// Number of frames recorded so far.
    pub fn filled(&self) -> usize { self.filled }

    /// Returns `true` if step `i` is a sampling step.
    pub fn is_due(&self, i: usize) -> bool {
        i == 0 || (i - 1) % self.cadence == 0
    }

    /// Record the density at step 0.
    ///
    /// *Panics if `rho` does not match the grid size*.
    pub fn record_initial<S>(&mut self, rho: &nd::ArrayBase<S, nd::Ix1>)
    where S: nd::Data<Elem = f64>
    {
        self.push(0, rho);
    }

    /// Record the density after step `i` if it is a sampling step. Returns
    /// `true` if a frame was recorded.
    ///
    /// *Panics if `rho` does not match the grid size*.
    pub fn observe<S>(&mut self, i: usize, rho: &nd::ArrayBase<S, nd::Ix1>)
        -> bool
    where S: nd::Data<Elem = f64>
    {
        if self.is_due(i) { self.push(i, rho) } else { false }
    }

    fn push<S>(&mut self, i: usize, rho: &nd::ArrayBase<S, nd::Ix1>) -> bool
    where S: nd::Data<Elem = f64>
    {
        if self.filled >= self.capacity() {
            trace!(step = i, "history full; frame not recorded");
            return false;
        }
        self.frames.row_mut(self.filled).assign(rho);
        debug!(step = i, frame = self.filled, "recorded density frame");
        self.filled += 1;
        true
    }

    /// Freeze the recorded frames into a [`History`].
    ///
    /// Any frames left unfilled by the sampling schedule are filled with
    /// `last`, the density after the final step.
    ///
    /// *Panics if `last` does not match the grid size*.
    pub fn finish<S>(mut self, last: &nd::ArrayBase<S, nd::Ix1>) -> History
    where S: nd::Data<Elem = f64>
    {
        if self.filled < self.capacity() {
            debug!(
                filled = self.filled,
                capacity = self.capacity(),
                "padding history with final density"
            );
            self.frames.slice_mut(nd::s![self.filled.., ..])
                .rows_mut()
                .into_iter()
                .for_each(|mut row| row.assign(last));
        }
        History { frames: self.frames, cadence: self.cadence }
    }
}

/// A finished, read-only sequence of density frames.
///
/// Frames are addressed by index, independently of the step granularity of
/// the run that produced them.
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    frames: nd::Array2<f64>,
    cadence: usize,
}

impl History {
    /// Number of frames.
    pub fn len(&self) -> usize { self.frames.nrows() }

    /// Returns `true` if there are no frames.
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Step interval between recorded frames.
    pub fn cadence(&self) -> usize { self.cadence }

    /// Get a single frame.
    pub fn get(&self, frame: usize) -> FrameResult<nd::ArrayView1<'_, f64>> {
        FrameError::check(frame, self.len())?;
        Ok(self.frames.row(frame))
    }

    /// All frames, with the first axis indexing frames.
    pub fn frames(&self) -> nd::ArrayView2<'_, f64> { self.frames.view() }

    /// Iterate over frames in order.
    pub fn iter(&self) -> nd::iter::LanesIter<'_, f64, nd::Ix1> {
        self.frames.rows().into_iter()
    }

    /// Consume `self`, returning the frame block.
    pub fn into_frames(self) -> nd::Array2<f64> { self.frames }
}

impl<'a> IntoIterator for &'a History {
    type Item = nd::ArrayView1<'a, f64>;
    type IntoIter = nd::iter::LanesIter<'a, f64, nd::Ix1>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
