use crate::constants::*;
use crate::countdown::{Countdown, CountdownTick};
use crate::dom;
use crate::input::is_activation_key;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Wire scroll reveals, level cards, the countdown, and in-page anchors.
/// Runs after the resume data has been injected (or failed to load).
pub fn init(window: &web::Window, document: &web::Document) {
    wire_reveal_observers(document);
    wire_level_cards(document);
    wire_countdown(window, document);
    wire_smooth_scroll(document);
    log::info!("[page] interactions ready");
}

/// Observer that runs `on_visible` once per target and then stops watching it.
fn one_shot_observer(
    threshold: f64,
    on_visible: impl Fn(&web::Element) + 'static,
) -> Option<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<web::IntersectionObserverEntry>() {
                    Ok(e) => e,
                    Err(_) => continue,
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    on_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_root_margin("0px");
    opts.set_threshold(&JsValue::from_f64(threshold));
    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts) {
        Ok(observer) => {
            callback.forget();
            Some(observer)
        }
        Err(e) => {
            log::error!("[page] IntersectionObserver error: {:?}", e);
            None
        }
    }
}

fn wire_reveal_observers(document: &web::Document) {
    if let Some(reveal) = one_shot_observer(REVEAL_THRESHOLD, |el| {
        _ = el.class_list().add_1("revealed");
    }) {
        for selector in [".reveal-on-scroll", ".level-card", ".score-entry"] {
            for el in dom::query_all(document, selector) {
                reveal.observe(&el);
            }
        }
    }
    if let Some(powerups) = one_shot_observer(POWERUP_THRESHOLD, unlock_powerup) {
        for el in dom::query_all(document, ".powerup") {
            powerups.observe(&el);
        }
    }
}

fn unlock_powerup(el: &web::Element) {
    _ = el.class_list().add_1("unlocking");
    let target = el.clone();
    let on_end = Closure::once_into_js(move || {
        let cl = target.class_list();
        _ = cl.remove_1("unlocking");
        _ = cl.add_1("unlocked");
    });
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = el.add_event_listener_with_callback_and_add_event_listener_options(
        "animationend",
        on_end.unchecked_ref(),
        &opts,
    );
}

fn set_expanded(card: &web::Element, expanded: bool) {
    _ = card.class_list().toggle_with_force("expanded", expanded);
    _ = card.set_attribute("aria-expanded", if expanded { "true" } else { "false" });
}

// At most one card is expanded at a time.
fn toggle_card(cards: &[web::Element], card: &web::Element) {
    for other in cards {
        if other != card && other.class_list().contains("expanded") {
            set_expanded(other, false);
        }
    }
    let expanded = !card.class_list().contains("expanded");
    set_expanded(card, expanded);
}

fn wire_level_cards(document: &web::Document) {
    let cards = Rc::new(dom::query_all(document, ".level-card"));
    for card in cards.iter() {
        _ = card.set_attribute("tabindex", "0");
        _ = card.set_attribute("role", "button");
        set_expanded(card, card.class_list().contains("expanded"));

        let all = cards.clone();
        let this = card.clone();
        dom::add_listener(card, "click", move |_ev| toggle_card(&all, &this));

        let this = card.clone();
        dom::add_listener(card, "keydown", move |ev| {
            let key = match ev.dyn_ref::<web::KeyboardEvent>() {
                Some(k) => k.key(),
                None => return,
            };
            if is_activation_key(&key) {
                ev.prevent_default();
                if let Some(el) = this.dyn_ref::<web::HtmlElement>() {
                    el.click();
                }
            }
        });
    }
}

fn wire_countdown(window: &web::Window, document: &web::Document) {
    let el = match document.query_selector(".countdown") {
        Ok(Some(el)) => el,
        _ => return,
    };
    let window = window.clone();
    if let Some(observer) = one_shot_observer(COUNTDOWN_THRESHOLD, move |target| {
        start_countdown(&window, target.clone());
    }) {
        observer.observe(&el);
    }
}

fn start_countdown(window: &web::Window, el: web::Element) {
    let mut countdown = Countdown::new(COUNTDOWN_START);
    let interval_id = Rc::new(Cell::new(None::<i32>));
    let interval_for_tick = interval_id.clone();
    let win = window.clone();
    let tick = Closure::wrap(Box::new(move || {
        if countdown.is_finished() {
            return;
        }
        let t = countdown.tick();
        el.set_text_content(Some(&t.label()));
        if t == CountdownTick::Finished {
            if let Some(id) = interval_for_tick.get() {
                win.clear_interval_with_handle(id);
            }
            if let Some(h) = el.dyn_ref::<web::HtmlElement>() {
                dom::set_style(h, "color", "var(--neon-green)");
                dom::set_style(
                    h,
                    "text-shadow",
                    "var(--glow-md) var(--neon-green), var(--glow-lg) var(--neon-green)",
                );
            }
        }
    }) as Box<dyn FnMut()>);
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        COUNTDOWN_INTERVAL_MS,
    ) {
        Ok(id) => interval_id.set(Some(id)),
        Err(e) => log::error!("[page] countdown interval error: {:?}", e),
    }
    tick.forget();
}

fn wire_smooth_scroll(document: &web::Document) {
    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let doc = document.clone();
        let link = anchor.clone();
        dom::add_listener(&anchor, "click", move |ev| {
            ev.prevent_default();
            let href = match link.get_attribute("href") {
                Some(h) => h,
                None => return,
            };
            // "#" alone is not a valid selector; treat like a missing target
            if let Ok(Some(target)) = doc.query_selector(&href) {
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}
