use crate::input::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer in client coordinates; leaving the document parks it
/// off-screen so no particle is repelled.
pub fn wire_pointer(document: &web::Document, pointer: Rc<RefCell<PointerState>>) {
    let pointer_move = pointer.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        pointer_move
            .borrow_mut()
            .set(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
    on_move.forget();

    let on_leave = Closure::wrap(Box::new(move || {
        pointer.borrow_mut().leave();
    }) as Box<dyn FnMut()>);
    _ = document.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
    on_leave.forget();
}
