use super::color::{gradient_partner, rainbow_pair, random_color};
use super::handle::{EffectHandle, PanelView};
use super::state::{Choice, ColorMode, Effect, SliderKind, SubEffect, UiState};
use crate::constants::PARTICLES_STEP;
use rand::Rng;

/// Turns panel events into handle writes and view updates.
///
/// `handle` is `None` when the effect library failed to load; every
/// operation that would write to it then degrades to a no-op while the view
/// still reflects what the user clicked.
pub struct Controller<H, V, R> {
    state: UiState,
    handle: Option<H>,
    view: V,
    rng: R,
}

impl<H: EffectHandle, V: PanelView, R: Rng> Controller<H, V, R> {
    pub fn new(handle: Option<H>, view: V, rng: R) -> Self {
        Self {
            state: UiState::default(),
            handle,
            view,
            rng,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Called once the loading overlay is gone.
    pub fn ready(&mut self) {
        self.refresh_particle_count();
        self.view.notify("3D Universe Ready!");
    }

    // ---------------- Color mode ----------------

    pub fn select_color_mode_tag(&mut self, tag: &str) {
        match tag.parse::<ColorMode>() {
            Ok(mode) => self.select_color_mode(mode),
            Err(e) => log::warn!("[panel] {}", e),
        }
    }

    pub fn select_color_mode(&mut self, mode: ColorMode) {
        self.state.color_mode = mode;
        self.mark_selected(mode);
        self.apply_color_mode();
        self.view.notify(&format!("Color mode: {}", mode.tag()));
    }

    /// The standalone "randomize" button; independent of the current mode.
    pub fn randomize_colors(&mut self) {
        if self.write_random_colors() {
            self.view.notify("Colors randomized!");
        }
    }

    fn write_random_colors(&mut self) -> bool {
        let Some(handle) = self.handle.as_mut() else {
            return false;
        };
        let light1 = random_color(&mut self.rng);
        let light2 = random_color(&mut self.rng);
        handle.set_colors(light1, light2);
        true
    }

    fn apply_color_mode(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        match self.state.color_mode {
            ColorMode::Random => {
                let light1 = random_color(&mut self.rng);
                let light2 = random_color(&mut self.rng);
                handle.set_colors(light1, light2);
            }
            ColorMode::Gradient => {
                let base = random_color(&mut self.rng);
                handle.set_colors(base, gradient_partner(base));
            }
            ColorMode::Mono => {
                let mono = random_color(&mut self.rng);
                handle.set_colors(mono, mono);
            }
            // recolored every frame in `frame`
            ColorMode::Rainbow => {}
        }
    }

    // ---------------- Effect ----------------

    pub fn select_effect_tag(&mut self, tag: &str) {
        match tag.parse::<Effect>() {
            Ok(effect) => self.select_effect(effect),
            Err(e) => log::warn!("[panel] {}", e),
        }
    }

    pub fn select_effect(&mut self, effect: Effect) {
        self.state.effect = effect;
        self.mark_selected(effect);
        self.apply_effect();
        self.view.notify(&format!("Effect: {}", effect.tag()));
    }

    fn apply_effect(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        let effect = self.state.effect;
        match (effect, handle.attraction()) {
            (Effect::Attraction, Some(a)) => handle.set_attraction(a.abs()),
            (Effect::Repulsion, Some(a)) => handle.set_attraction(-a.abs()),
            (Effect::Attraction | Effect::Repulsion, None) => {
                log::debug!("[panel] no readable attraction; sign left alone")
            }
            // The library ships no swirl/chaos behavior; only the optional
            // flags are driven so a build that adds them picks them up.
            (Effect::Swirl | Effect::Chaos, _) => {}
        }
        let wanted = SubEffect::for_effect(effect);
        for sub in SubEffect::ALL {
            let active = wanted == Some(sub);
            if !handle.set_sub_effect(sub, active) && active {
                log::debug!("[panel] library exposes no `{}`", sub.property());
            }
        }
    }

    fn mark_selected<C: Choice>(&mut self, choice: C) {
        self.view.mark_active(C::GROUP, choice.tag());
        self.view.show_selection_label(C::GROUP, choice.label());
    }

    // ---------------- Sliders ----------------

    pub fn slider_input(&mut self, slider: SliderKind, raw: &str) {
        self.view.show_slider_value(slider, raw);
        let value = match slider.parse(raw) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("[panel] {}", e);
                return;
            }
        };
        if let Some(handle) = self.handle.as_mut() {
            write_slider(handle, slider, value);
        }
    }

    // ---------------- Actions ----------------

    pub fn reset(&mut self) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        for slider in SliderKind::ALL {
            let value = slider.default_value();
            write_slider(handle, slider, value);
            self.view.set_slider_position(slider, value);
            self.view.show_slider_value(slider, &value.to_string());
        }

        self.state.color_mode = ColorMode::Random;
        self.mark_selected(ColorMode::Random);
        self.write_random_colors();

        self.state.effect = Effect::Attraction;
        self.mark_selected(Effect::Attraction);
        self.apply_effect();

        self.view.notify("Reset to default settings");
    }

    pub fn clear_particles(&mut self) {
        self.state.particles_count = 0;
        self.refresh_particle_count();
        self.view.notify("Particles cleared");
    }

    pub fn add_particles(&mut self) {
        self.state.particles_count = self.state.particles_count.saturating_add(PARTICLES_STEP);
        self.refresh_particle_count();
        self.view.notify(&format!(
            "Added {} particles (Total: {})",
            PARTICLES_STEP, self.state.particles_count
        ));
    }

    fn refresh_particle_count(&mut self) {
        if self.handle.is_some() {
            self.view.show_particle_count(self.state.particles_count);
        }
    }

    pub fn toggle_panel(&mut self) {
        self.state.panel_collapsed = !self.state.panel_collapsed;
        self.view.set_panel_collapsed(self.state.panel_collapsed);
    }

    // ---------------- Per-frame ----------------

    /// Runs once per display frame with the frame time in seconds.
    pub fn frame(&mut self, time_sec: f64) {
        if self.state.color_mode != ColorMode::Rainbow {
            return;
        }
        if let Some(handle) = self.handle.as_mut() {
            let (light1, light2) = rainbow_pair(time_sec);
            handle.set_colors(light1, light2);
        }
    }
}

fn write_slider<H: EffectHandle>(handle: &mut H, slider: SliderKind, value: f64) {
    match slider {
        SliderKind::Size => handle.set_particle_size(value),
        SliderKind::Speed => handle.set_speed(value),
        SliderKind::Attraction => handle.set_attraction(value),
    }
}
