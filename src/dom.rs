use crate::constants::REDUCED_MOTION_QUERY;
use crate::viewport::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    match window.match_media(REDUCED_MOTION_QUERY) {
        Ok(Some(mq)) => mq.matches(),
        _ => false,
    }
}

pub fn current_viewport(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(
        width as f32,
        height as f32,
        window.device_pixel_ratio() as f32,
    )
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(js_err)
}

/// Size the backing store in device pixels, the element in CSS pixels, and
/// scale the context so drawing code works in CSS pixels.
pub fn sync_canvas_to_viewport(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    viewport: &Viewport,
) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    set_style(canvas, "width", &format!("{}px", viewport.width));
    set_style(canvas, "height", &format!("{}px", viewport.height));
    let dpr = viewport.dpr as f64;
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    match document.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|n| n.dyn_into::<web::Element>().ok())
            .collect(),
        Err(e) => {
            log::warn!("[page] bad selector {}: {:?}", selector, e);
            Vec::new()
        }
    }
}

/// Replace the markup of `#id`; returns false when the element is absent.
pub fn set_inner_html_by_id(document: &web::Document, id: &str, html: &str) -> bool {
    match document.get_element_by_id(id) {
        Some(el) => {
            el.set_inner_html(html);
            true
        }
        None => false,
    }
}

#[inline]
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
