//! Capability seams between the controller and the outside world.
//!
//! The controller only ever talks to the effect library through
//! [`EffectHandle`] and to the page through [`PanelView`]. The web build
//! implements both over `js_sys`/`web_sys`; tests substitute fakes.

use super::state::{SelectionGroup, SliderKind, SubEffect};
use crate::constants::{DEFAULT_ATTRACTION, DEFAULT_SIZE, DEFAULT_SPEED, INITIAL_PARTICLES};

/// Initial options handed to the effect library constructor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorConfig {
    pub count: u32,
    pub attraction_intensity: f64,
    pub size: f64,
    pub speed: f64,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            count: INITIAL_PARTICLES,
            attraction_intensity: DEFAULT_ATTRACTION,
            size: DEFAULT_SIZE,
            speed: DEFAULT_SPEED,
        }
    }
}

/// Writable surface of the particle-cursor object.
pub trait EffectHandle {
    fn set_particle_size(&mut self, size: f64);
    fn set_speed(&mut self, speed: f64);
    fn set_attraction(&mut self, intensity: f64);
    /// Current attraction intensity, read back before sign forcing. `None`
    /// when the library exposes no readable number.
    fn attraction(&self) -> Option<f64>;
    fn set_colors(&mut self, light1: u32, light2: u32);
    /// Toggle an optional sub-effect. Returns `false` when the library does
    /// not expose it.
    fn set_sub_effect(&mut self, effect: SubEffect, active: bool) -> bool;
}

/// Page outputs the controller produces.
pub trait PanelView {
    fn show_particle_count(&mut self, count: u32);
    /// Highlight the button tagged `tag` and clear every other in `group`.
    fn mark_active(&mut self, group: SelectionGroup, tag: &str);
    fn show_selection_label(&mut self, group: SelectionGroup, label: &str);
    fn show_slider_value(&mut self, slider: SliderKind, text: &str);
    fn set_slider_position(&mut self, slider: SliderKind, value: f64);
    fn set_panel_collapsed(&mut self, collapsed: bool);
    fn notify(&mut self, message: &str);
}
