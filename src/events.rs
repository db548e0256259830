use crate::constants::{ADD_BTN_ID, CLEAR_BTN_ID, COLORS_BTN_ID, PANEL_TOGGLE_ID, RESET_BTN_ID};
use crate::core::{SelectionGroup, SliderKind};
use crate::dom;
use crate::view;
use crate::PanelController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

type Shared = Rc<RefCell<PanelController>>;

/// Bind every panel control to the controller.
pub fn wire_controls(document: &web::Document, controller: &Shared) {
    wire_selection_group(document, controller, SelectionGroup::ColorMode);
    wire_selection_group(document, controller, SelectionGroup::Effect);
    wire_sliders(document, controller);
    wire_action_buttons(document, controller);
}

fn wire_selection_group(document: &web::Document, controller: &Shared, group: SelectionGroup) {
    let (selector, data_attr) = view::group_buttons(group);
    dom::for_each_match(document, selector, |button| {
        let Some(tag) = button.get_attribute(data_attr) else {
            log::warn!("[events] {} button without {}", selector, data_attr);
            return;
        };
        let ctrl = controller.clone();
        dom::add_listener(&button, "click", move |_| {
            let mut c = ctrl.borrow_mut();
            match group {
                SelectionGroup::ColorMode => c.select_color_mode_tag(&tag),
                SelectionGroup::Effect => c.select_effect_tag(&tag),
            }
        });
    });
}

fn wire_sliders(document: &web::Document, controller: &Shared) {
    for slider in SliderKind::ALL {
        let Some(input) = document
            .get_element_by_id(slider.input_id())
            .and_then(|e| e.dyn_into::<web::HtmlInputElement>().ok())
        else {
            log::warn!("[events] missing slider #{}", slider.input_id());
            continue;
        };
        let ctrl = controller.clone();
        let input_read = input.clone();
        dom::add_listener(&input, "input", move |_| {
            ctrl.borrow_mut().slider_input(slider, &input_read.value());
        });
    }
}

fn wire_action_buttons(document: &web::Document, controller: &Shared) {
    let ctrl = controller.clone();
    dom::add_click_listener(document, COLORS_BTN_ID, move || {
        ctrl.borrow_mut().randomize_colors()
    });
    let ctrl = controller.clone();
    dom::add_click_listener(document, RESET_BTN_ID, move || ctrl.borrow_mut().reset());
    let ctrl = controller.clone();
    dom::add_click_listener(document, CLEAR_BTN_ID, move || {
        ctrl.borrow_mut().clear_particles()
    });
    let ctrl = controller.clone();
    dom::add_click_listener(document, ADD_BTN_ID, move || ctrl.borrow_mut().add_particles());
    let ctrl = controller.clone();
    dom::add_click_listener(document, PANEL_TOGGLE_ID, move || {
        ctrl.borrow_mut().toggle_panel()
    });
}

/// Forward global pointer movement and window resizes to the effect library.
pub fn wire_pointer_forwarding(document: &web::Document, controller: &Shared) {
    let ctrl = controller.clone();
    dom::add_listener(document, "mousemove", move |ev| {
        if let Ok(mouse) = ev.dyn_into::<web::MouseEvent>() {
            if let Some(handle) = ctrl.borrow().handle() {
                handle.forward_mouse_move(&mouse);
            }
        }
    });

    if let Some(window) = web::window() {
        let ctrl = controller.clone();
        dom::add_listener(&window, "resize", move |_| {
            if let Some(handle) = ctrl.borrow().handle() {
                handle.resize();
            }
        });
    }
}
