//! Control panel for a particle-cursor effect, compiled to WebAssembly.
//!
//! The panel logic lives in [`core`] and runs on any target; the DOM and
//! effect-library bindings are only built for `wasm32`.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod cursor;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod view;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
type PanelController = crate::core::Controller<cursor::JsHandle, view::DomView, rand::rngs::StdRng>;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::constants::{CANVAS_ID, READY_DELAY_MS};
    use crate::core::{Controller, CursorConfig};
    use crate::{cursor, dom, events, frame, overlay, view};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("cursor-panel starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    async fn init() -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        overlay::start_progress(&document);

        // A failed library load leaves the panel usable; handle writes no-op.
        let handle = match cursor::JsHandle::create(&canvas, &CursorConfig::default()) {
            Ok(h) => Some(h),
            Err(e) => {
                log::error!("[cursor] create failed: {:?}", e);
                None
            }
        };

        dom::sleep_ms(READY_DELAY_MS).await;
        overlay::hide_loading(&document);

        let view = view::DomView::new(document.clone());
        let controller = Rc::new(RefCell::new(Controller::new(
            handle,
            view,
            StdRng::from_entropy(),
        )));

        events::wire_controls(&document, &controller);
        events::wire_pointer_forwarding(&document, &controller);
        frame::start_loop(controller.clone());
        controller.borrow_mut().ready();
        Ok(())
    }
}
