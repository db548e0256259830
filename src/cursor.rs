use crate::core::{CursorConfig, EffectHandle, SubEffect};
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen(
    raw_module = "https://cdn.jsdelivr.net/npm/threejs-components@0.0.26/build/cursors/attraction1.min.js"
)]
extern "C" {
    #[wasm_bindgen(js_name = default, catch)]
    fn attraction_cursor(
        canvas: &web::HtmlCanvasElement,
        options: &JsValue,
    ) -> Result<JsValue, JsValue>;
}

// ---------------- Reflect helpers ----------------
// Every lookup is existence-checked: a missing or null field yields None and
// the caller skips the write.

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    if !target.is_object() && !target.is_function() {
        return None;
    }
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> bool {
    target.is_object() && Reflect::set(target, &JsValue::from_str(key), value).unwrap_or(false)
}

fn get_path(target: &JsValue, path: &[&str]) -> Option<JsValue> {
    path.iter().try_fold(target.clone(), |obj, key| get(&obj, key))
}

fn call_method(target: &JsValue, name: &str, args: &[&JsValue]) -> bool {
    let Some(func) = get(target, name).and_then(|f| f.dyn_into::<Function>().ok()) else {
        return false;
    };
    let res = match args {
        [] => func.call0(target),
        [a] => func.call1(target, a),
        _ => return false,
    };
    if let Err(e) = res {
        log::warn!("[cursor] {} threw: {:?}", name, e);
        return false;
    }
    true
}

fn options_object(config: &CursorConfig) -> Result<JsValue, JsValue> {
    let particles = Object::new();
    Reflect::set(&particles, &"count".into(), &JsValue::from(config.count))?;
    Reflect::set(
        &particles,
        &"attractionIntensity".into(),
        &JsValue::from_f64(config.attraction_intensity),
    )?;
    Reflect::set(&particles, &"size".into(), &JsValue::from_f64(config.size))?;
    Reflect::set(&particles, &"speed".into(), &JsValue::from_f64(config.speed))?;
    let options = Object::new();
    Reflect::set(&options, &"particles".into(), &particles)?;
    Ok(options.into())
}

/// The object returned by the attraction-cursor library.
pub struct JsHandle {
    app: JsValue,
}

impl JsHandle {
    pub fn create(canvas: &web::HtmlCanvasElement, config: &CursorConfig) -> anyhow::Result<Self> {
        let options = options_object(config).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let app = attraction_cursor(canvas, &options).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        if !app.is_object() {
            anyhow::bail!("cursor library returned {:?}", app);
        }
        log::info!(
            "[cursor] created count={} size={} speed={} attraction={}",
            config.count,
            config.size,
            config.speed,
            config.attraction_intensity
        );
        Ok(Self { app })
    }

    fn particles(&self) -> Option<JsValue> {
        get(&self.app, "particles")
    }

    fn set_particle_field(&self, key: &str, value: f64) {
        match self.particles() {
            Some(p) => {
                set(&p, key, &JsValue::from_f64(value));
            }
            None => log::debug!("[cursor] no particles object; skipped {}", key),
        }
    }

    pub fn forward_mouse_move(&self, ev: &web::MouseEvent) {
        if let Some(p) = self.particles() {
            let ev: &JsValue = ev.as_ref();
            call_method(&p, "onMouseMove", &[ev]);
        }
    }

    pub fn resize(&self) {
        call_method(&self.app, "onResize", &[]);
    }
}

impl EffectHandle for JsHandle {
    fn set_particle_size(&mut self, size: f64) {
        self.set_particle_field("size", size);
    }

    fn set_speed(&mut self, speed: f64) {
        self.set_particle_field("speed", speed);
    }

    fn set_attraction(&mut self, intensity: f64) {
        self.set_particle_field("attractionIntensity", intensity);
    }

    fn attraction(&self) -> Option<f64> {
        self.particles()
            .and_then(|p| get(&p, "attractionIntensity"))
            .and_then(|v| v.as_f64())
    }

    fn set_colors(&mut self, light1: u32, light2: u32) {
        let Some(p) = self.particles() else {
            return;
        };
        for (light, rgb) in [("light1", light1), ("light2", light2)] {
            match get_path(&p, &[light, "color"]) {
                Some(color) => {
                    call_method(&color, "set", &[&JsValue::from(rgb)]);
                }
                None => log::debug!("[cursor] no {}.color", light),
            }
        }
    }

    fn set_sub_effect(&mut self, effect: SubEffect, active: bool) -> bool {
        self.particles()
            .and_then(|p| get(&p, effect.property()))
            .map(|sub| set(&sub, "active", &JsValue::from_bool(active)))
            .unwrap_or(false)
    }
}
