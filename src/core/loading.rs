use crate::constants::{LOADING_DONE, LOADING_STEP_MAX};
use rand::Rng;

/// Cosmetic loading bar. Advances by a random step per tick and has no tie
/// to actual initialization progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoadingBar {
    value: f64,
}

impl LoadingBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_done(&self) -> bool {
        self.value >= LOADING_DONE
    }

    /// Advance by `step`, clamped to 100. Returns `true` once full.
    pub fn advance(&mut self, step: f64) -> bool {
        self.value = (self.value + step.max(0.0)).min(LOADING_DONE);
        self.is_done()
    }

    pub fn advance_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let step = rng.gen::<f64>() * LOADING_STEP_MAX;
        self.advance(step)
    }

    /// CSS width for the progress element, e.g. `"42.5%"`.
    pub fn width_css(&self) -> String {
        format!("{}%", self.value)
    }
}
