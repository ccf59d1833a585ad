pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod reveal;
#[cfg(target_arch = "wasm32")]
mod slot;
#[cfg(target_arch = "wasm32")]
mod view;

#[cfg(target_arch = "wasm32")]
pub use web_entry::start;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::app::App;
    use crate::core::default_slot_configs;
    use crate::dom;
    use crate::events;
    use crate::render::GpuShared;
    use crate::reveal::{self, ScrollReveals};
    use crate::slot::PatternSlot;
    use crate::view::PageView;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;

    async fn init() -> anyhow::Result<()> {
        let document =
            dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

        // Page interactions work with or without WebGPU
        let app = Rc::new(RefCell::new(App::new(
            PageView::collect(&document),
            ScrollReveals::collect(&document),
        )));
        events::wire_page(&app);
        reveal::play_hero(&document);
        // Content already in view on load
        app.borrow_mut().check_reveals();

        let gpu = match GpuShared::acquire().await {
            Ok(gpu) => gpu,
            Err(e) => {
                log::error!("[init] WebGPU unavailable, patterns disabled: {:?}", e);
                return Ok(());
            }
        };

        let slots: Vec<Option<PatternSlot>> = default_slot_configs()
            .into_iter()
            .map(|config| PatternSlot::mount(&document, gpu.clone(), config))
            .collect();
        let mounted: Vec<String> = slots.iter().flatten().map(|s| s.canvas_id()).collect();
        log::info!("[init] mounted patterns: {}", mounted.join(", "));
        app.borrow_mut().set_slots(slots);
        Ok(())
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("clearseas-web starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }
}
