use crate::constants::KEYDOWN_EVENT;
use crate::shortcut::KeyPress;
use crate::toggle::AdminToggle;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn key_press_from_event(ev: &web::KeyboardEvent) -> KeyPress {
    KeyPress::new(ev.key(), ev.shift_key())
}

// Register the admin toggle on `document` keydown for the page's lifetime.
pub fn wire_admin_toggle(document: &web::Document, toggle: Rc<RefCell<AdminToggle<web::Document>>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        toggle.borrow_mut().handle_key(&key_press_from_event(&ev));
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback(KEYDOWN_EVENT, closure.as_ref().unchecked_ref());
    closure.forget();
}
