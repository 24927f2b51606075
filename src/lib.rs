#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod config;
mod constants;
mod dom;
mod events;
mod shortcut;
mod toggle;

pub use config::ToggleConfig;
pub use shortcut::{KeyPress, Shortcut};
pub use toggle::{AdminToggle, StyleTarget, Visibility};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("admin-reveal starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window document"))?;

    // Element is looked up on every toggle, so it may be added after load.
    let toggle = AdminToggle::new(document.clone());
    log::info!(
        "[keys] {} toggles #{}",
        toggle.config().shortcut,
        toggle.config().target_id
    );
    events::wire_admin_toggle(&document, Rc::new(RefCell::new(toggle)));
    Ok(())
}
