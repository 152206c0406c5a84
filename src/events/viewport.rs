use crate::viewport::ViewportSignals;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Handlers only record; the frame loop applies resize and scroll changes.
pub fn wire_viewport(window: &web::Window, signals: Rc<RefCell<ViewportSignals>>) {
    let signals_resize = signals.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        signals_resize.borrow_mut().resize.trigger(Instant::now());
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();

    let on_scroll = Closure::wrap(Box::new(move || {
        signals.borrow_mut().scroll_pending = true;
    }) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        &opts,
    );
    on_scroll.forget();
}
