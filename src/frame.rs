use crate::constants::*;
use crate::dom;
use crate::events;
use crate::field::{target_count, ParticleField};
use crate::input::PointerState;
use crate::render::{self, SpriteFactory};
use crate::sprite::SpriteCache;
use crate::viewport::{scroll_opacity, start_gate, StartGate, Viewport, ViewportSignals};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub viewport: Viewport,

    pub field: ParticleField,
    pub sprites: SpriteCache<web::HtmlCanvasElement>,
    pub factory: SpriteFactory,

    pub pointer: Rc<RefCell<PointerState>>,
    pub signals: Rc<RefCell<ViewportSignals>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let (resize_due, scroll_due) = {
            let mut s = self.signals.borrow_mut();
            (s.resize.poll(now), s.take_scroll())
        };
        if resize_due {
            self.apply_resize();
        }
        if scroll_due {
            self.apply_scroll_opacity();
        }

        let pointer = self.pointer.borrow().pos();
        self.field.update(pointer);
        render::draw_field(
            &self.ctx,
            &self.viewport,
            &self.field,
            &mut self.sprites,
            &self.factory,
        );
    }

    fn apply_resize(&mut self) {
        self.viewport = dom::current_viewport(&self.window);
        dom::sync_canvas_to_viewport(&self.canvas, &self.ctx, &self.viewport);
        self.field.resize(self.viewport.width, self.viewport.height);
        let target = target_count(self.viewport.width);
        if target != self.field.len() {
            log::info!(
                "[particles] reconcile {} -> {} at width {:.0}",
                self.field.len(),
                target,
                self.viewport.width
            );
        }
        self.field.reconcile(target);
    }

    fn apply_scroll_opacity(&self) {
        let height = dom::current_viewport(&self.window).height;
        let opacity = scroll_opacity(dom::scroll_y(&self.window), height);
        dom::set_style(&self.canvas, "opacity", &opacity.to_string());
    }
}

/// Set up the particle background. Returns `Ok(None)` when the component is
/// intentionally skipped (reduced motion, no canvas on the page).
pub fn init_field(
    window: &web::Window,
    document: &web::Document,
) -> anyhow::Result<Option<Rc<RefCell<FrameContext>>>> {
    let element = document.get_element_by_id(PARTICLE_CANVAS_ID);
    match start_gate(dom::prefers_reduced_motion(window), element.is_some()) {
        StartGate::ReducedMotion => {
            log::info!("[particles] reduced motion preferred; background disabled");
            return Ok(None);
        }
        StartGate::NoCanvas => {
            log::warn!("[particles] missing #{}", PARTICLE_CANVAS_ID);
            return Ok(None);
        }
        StartGate::Run => {}
    }
    let Some(element) = element else {
        return Ok(None);
    };
    let canvas = element
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", PARTICLE_CANVAS_ID, e))?;
    let ctx = dom::context_2d(&canvas)?;

    let viewport = dom::current_viewport(window);
    dom::sync_canvas_to_viewport(&canvas, &ctx, &viewport);

    let mut field = ParticleField::with_rng(viewport.width, viewport.height, StdRng::from_entropy());
    field.create(target_count(viewport.width), true);
    log::info!(
        "[particles] seeded {} at {:.0}x{:.0} dpr={}",
        field.len(),
        viewport.width,
        viewport.height,
        viewport.dpr
    );

    let pointer = Rc::new(RefCell::new(PointerState::offscreen()));
    let signals = Rc::new(RefCell::new(ViewportSignals::new(Duration::from_millis(
        RESIZE_DEBOUNCE_MS,
    ))));
    events::wire_pointer(document, pointer.clone());
    events::wire_viewport(window, signals.clone());

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        window: window.clone(),
        canvas,
        ctx,
        viewport,
        field,
        sprites: SpriteCache::new(),
        factory: SpriteFactory::new(document.clone(), viewport.dpr as f64),
        pointer,
        signals,
    }));
    start_loop(frame_ctx.clone());
    Ok(Some(frame_ctx))
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    let Some(window) = web::window() else {
        return;
    };
    let first = tick.borrow();
    if let Some(cb) = first.as_ref() {
        _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
