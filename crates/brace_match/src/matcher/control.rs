//! Step-boundary interruption of scans.

/// Consulted once per step of every scan; returning `false` stops it.
///
/// The matcher has no cancellation of its own. Hosts bound the cost of a
/// scan on huge unbalanced files by passing a control that gives up after
/// a step budget, a deadline, or an external signal.
pub trait ScanControl {
    fn should_continue(&mut self) -> bool;
}

impl<S: ScanControl + ?Sized> ScanControl for &mut S {
    #[inline]
    fn should_continue(&mut self) -> bool {
        (**self).should_continue()
    }
}

impl<S: ScanControl> ScanControl for Option<S> {
    #[inline]
    fn should_continue(&mut self) -> bool {
        match self {
            Some(control) => control.should_continue(),
            None => true,
        }
    }
}

/// Never stops a scan.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unbounded;

impl ScanControl for Unbounded {
    #[inline]
    fn should_continue(&mut self) -> bool {
        true
    }
}

/// Stops a scan after a fixed number of steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepLimit {
    remaining: usize,
}

impl StepLimit {
    pub fn new(steps: usize) -> Self {
        StepLimit { remaining: steps }
    }

    /// Steps left before the limit is hit.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl ScanControl for StepLimit {
    #[inline]
    fn should_continue(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }
}

/// A [`ScanControl`] backed by a closure. See [`from_fn`].
#[derive(Clone, Copy, Debug)]
pub struct FnControl<F>(F);

impl<F: FnMut() -> bool> ScanControl for FnControl<F> {
    #[inline]
    fn should_continue(&mut self) -> bool {
        (self.0)()
    }
}

/// Control a scan with a closure, e.g. a deadline check.
pub fn from_fn<F: FnMut() -> bool>(f: F) -> FnControl<F> {
    FnControl(f)
}
