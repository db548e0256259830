use crate::constants::*;
use crate::core::{PanelView, SelectionGroup, SliderKind, Toast};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct GroupDom {
    selector: &'static str,
    data_attr: &'static str,
    label_id: &'static str,
}

fn group_dom(group: SelectionGroup) -> GroupDom {
    match group {
        SelectionGroup::ColorMode => GroupDom {
            selector: COLOR_BTN_SELECTOR,
            data_attr: "data-color",
            label_id: COLOR_MODE_LABEL_ID,
        },
        SelectionGroup::Effect => GroupDom {
            selector: EFFECT_BTN_SELECTOR,
            data_attr: "data-effect",
            label_id: EFFECT_MODE_LABEL_ID,
        },
    }
}

/// Selector and data attribute of the buttons in `group`.
pub fn group_buttons(group: SelectionGroup) -> (&'static str, &'static str) {
    let g = group_dom(group);
    (g.selector, g.data_attr)
}

/// Mirror the toast slot into `#notification`.
fn render_toast(document: &web::Document, toast: &Toast<i32>) {
    match toast.visible_text() {
        Some(text) => {
            dom::set_text(document, NOTIFICATION_TEXT_ID, text);
            dom::set_class(document, NOTIFICATION_ID, SHOW_CLASS, true);
        }
        None => dom::set_class(document, NOTIFICATION_ID, SHOW_CLASS, false),
    }
}

/// [`PanelView`] over the live document.
pub struct DomView {
    document: web::Document,
    toast: Rc<RefCell<Toast<i32>>>,
}

impl DomView {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            toast: Rc::new(RefCell::new(Toast::new())),
        }
    }
}

impl PanelView for DomView {
    fn show_particle_count(&mut self, count: u32) {
        dom::set_text(&self.document, PARTICLE_COUNT_ID, &count.to_string());
    }

    fn mark_active(&mut self, group: SelectionGroup, tag: &str) {
        let g = group_dom(group);
        dom::for_each_match(&self.document, g.selector, |el| {
            let on = el.get_attribute(g.data_attr).as_deref() == Some(tag);
            _ = el.class_list().toggle_with_force(ACTIVE_CLASS, on);
        });
    }

    fn show_selection_label(&mut self, group: SelectionGroup, label: &str) {
        dom::set_text(&self.document, group_dom(group).label_id, label);
    }

    fn show_slider_value(&mut self, slider: SliderKind, text: &str) {
        dom::set_text(&self.document, slider.label_id(), text);
    }

    fn set_slider_position(&mut self, slider: SliderKind, value: f64) {
        if let Some(input) = self
            .document
            .get_element_by_id(slider.input_id())
            .and_then(|e| e.dyn_into::<web::HtmlInputElement>().ok())
        {
            input.set_value(&value.to_string());
        }
    }

    fn set_panel_collapsed(&mut self, collapsed: bool) {
        dom::set_class(&self.document, PANEL_CONTENT_ID, COLLAPSED_CLASS, collapsed);
        let icon = self
            .document
            .get_element_by_id(PANEL_TOGGLE_ID)
            .and_then(|t| t.query_selector("i").ok().flatten());
        if let Some(icon) = icon {
            let cl = icon.class_list();
            _ = cl.toggle_with_force(CHEVRON_UP_CLASS, !collapsed);
            _ = cl.toggle_with_force(CHEVRON_DOWN_CLASS, collapsed);
        }
    }

    fn notify(&mut self, message: &str) {
        let (generation, superseded) = self.toast.borrow_mut().show(message);
        if let Some(prev) = superseded {
            dom::clear_timeout(prev);
        }
        render_toast(&self.document, &self.toast.borrow());

        let toast = self.toast.clone();
        let document = self.document.clone();
        let timer = dom::set_timeout(NOTIFICATION_MS, move || {
            let mut slot = toast.borrow_mut();
            if slot.expire(generation) {
                render_toast(&document, &slot);
            }
        });
        match timer {
            Some(id) => {
                if let Some(stale) = self.toast.borrow_mut().arm(generation, id) {
                    dom::clear_timeout(stale);
                }
            }
            None => log::warn!("[toast] setTimeout failed; \"{}\" stays visible", message),
        }
    }
}
