// Fakes standing in for the effect library and the DOM.

#![allow(dead_code)]

use cursor_panel::core::{
    Controller, CursorConfig, EffectHandle, PanelView, SelectionGroup, SliderKind, SubEffect,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct FakeHandle {
    pub size: f64,
    pub speed: f64,
    pub attraction: f64,
    pub attraction_writes: usize,
    // library object without a numeric `attractionIntensity`
    pub attraction_unreadable: bool,
    pub light1: u32,
    pub light2: u32,
    pub color_writes: usize,
    // None = the library does not expose this sub-effect
    pub swirl: Option<bool>,
    pub chaos: Option<bool>,
}

impl FakeHandle {
    pub fn from_config(config: &CursorConfig) -> Self {
        Self {
            size: config.size,
            speed: config.speed,
            attraction: config.attraction_intensity,
            ..Self::default()
        }
    }
}

impl EffectHandle for FakeHandle {
    fn set_particle_size(&mut self, size: f64) {
        self.size = size;
    }

    fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    fn set_attraction(&mut self, intensity: f64) {
        self.attraction = intensity;
        self.attraction_writes += 1;
    }

    fn attraction(&self) -> Option<f64> {
        (!self.attraction_unreadable).then_some(self.attraction)
    }

    fn set_colors(&mut self, light1: u32, light2: u32) {
        self.light1 = light1;
        self.light2 = light2;
        self.color_writes += 1;
    }

    fn set_sub_effect(&mut self, effect: SubEffect, active: bool) -> bool {
        let slot = match effect {
            SubEffect::Swirl => &mut self.swirl,
            SubEffect::Chaos => &mut self.chaos,
        };
        match slot {
            Some(flag) => {
                *flag = active;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub particle_count: Option<String>,
    pub active: HashMap<SelectionGroup, String>,
    pub labels: HashMap<SelectionGroup, String>,
    pub slider_text: HashMap<SliderKind, String>,
    pub slider_position: HashMap<SliderKind, f64>,
    pub collapsed: bool,
    pub notifications: Vec<String>,
}

impl RecordingView {
    pub fn last_notification(&self) -> Option<&str> {
        self.notifications.last().map(String::as_str)
    }
}

impl PanelView for RecordingView {
    fn show_particle_count(&mut self, count: u32) {
        self.particle_count = Some(count.to_string());
    }

    fn mark_active(&mut self, group: SelectionGroup, tag: &str) {
        self.active.insert(group, tag.to_string());
    }

    fn show_selection_label(&mut self, group: SelectionGroup, label: &str) {
        self.labels.insert(group, label.to_string());
    }

    fn show_slider_value(&mut self, slider: SliderKind, text: &str) {
        self.slider_text.insert(slider, text.to_string());
    }

    fn set_slider_position(&mut self, slider: SliderKind, value: f64) {
        self.slider_position.insert(slider, value);
    }

    fn set_panel_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

pub type TestController = Controller<FakeHandle, RecordingView, StdRng>;

pub fn controller() -> TestController {
    let handle = FakeHandle::from_config(&CursorConfig::default());
    Controller::new(Some(handle), RecordingView::default(), StdRng::seed_from_u64(7))
}

pub fn controller_with(handle: FakeHandle) -> TestController {
    Controller::new(Some(handle), RecordingView::default(), StdRng::seed_from_u64(7))
}

pub fn headless_controller() -> TestController {
    Controller::new(None, RecordingView::default(), StdRng::seed_from_u64(7))
}

pub fn handle(c: &TestController) -> &FakeHandle {
    c.handle().expect("controller built with a handle")
}
