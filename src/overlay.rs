use crate::constants::{HIDDEN_CLASS, LOADING_SCREEN_ID, LOADING_TICK_MS, PROGRESS_ID};
use crate::core::LoadingBar;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_SCREEN_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}

fn set_progress_width(document: &web::Document, width: &str) {
    if let Some(el) = document
        .get_element_by_id(PROGRESS_ID)
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
    {
        _ = el.style().set_property("width", width);
    }
}

/// Run the cosmetic progress bar until it fills, then clear its interval.
pub fn start_progress(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let bar = Rc::new(RefCell::new(LoadingBar::new()));
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));
    let interval: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let document = document.clone();
    let interval_tick = interval.clone();
    let tick = Closure::wrap(Box::new(move || {
        let done = bar.borrow_mut().advance_random(&mut *rng.borrow_mut());
        set_progress_width(&document, &bar.borrow().width_css());
        if done {
            if let (Some(w), Some(id)) = (web::window(), interval_tick.take()) {
                w.clear_interval_with_handle(id);
                log::info!("[loading] progress complete");
            }
        }
    }) as Box<dyn FnMut()>);

    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        LOADING_TICK_MS,
    ) {
        Ok(id) => interval.set(Some(id)),
        Err(e) => log::warn!("[loading] setInterval failed: {:?}", e),
    }
    tick.forget();
}
